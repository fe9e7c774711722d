mod chat_service_test;
mod observation_test;
mod prompt_test;
