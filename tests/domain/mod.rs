mod storage_path_test;
mod upload_policy_test;
