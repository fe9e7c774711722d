//! Prompt composition for the health chatbot. Three payload shapes exist:
//! image + text, extracted-document text + text, and text only. Every shape
//! carries the same fixed behavioral system prompt.

use bytes::Bytes;

use crate::application::ports::ModelPrompt;

/// Behavioral contract sent ahead of every user message. The rules are the
/// product's safety posture; treat the text as configuration.
pub const SYSTEM_PROMPT: &str = "\
You are HealthAI Assistant, a specialized healthcare AI with expertise in:
1. Medical information and disease education
2. Symptom analysis (NOT diagnosis)
3. Health and wellness guidance
4. Medication information
5. Nutrition and exercise advice
6. Mental health support
7. Medical document/image analysis (lab results, prescriptions, etc.)

CRITICAL RULES YOU MUST FOLLOW:
1. NEVER provide medical diagnoses - always recommend consulting healthcare professionals
2. For emergency symptoms (chest pain, difficulty breathing, severe bleeding), always advise immediate medical attention
3. Be empathetic, accurate, and professional
4. If analyzing medical documents, focus on explaining terminology, not providing interpretations
5. Always include a disclaimer that you are not a medical professional
6. If unsure about something, admit your limitations
7. Never recommend specific medications or dosages
8. Always encourage follow-up with healthcare providers

Format responses with:
- Clear headings for different sections
- Bullet points for lists
- Bold text for important warnings
- A clear disclaimer at the end

Tone: Professional, empathetic, helpful but cautious.";

/// Appended to every successful image analysis before it is returned.
pub const IMAGE_DISCLAIMER: &str = "\n\n**⚠️ Important**: This image analysis is for educational \
purposes only and should not be used for diagnosis. Please consult a healthcare professional \
for medical advice.";

/// Document context is clipped before composition so a large extraction
/// cannot crowd the user's question out of the model's context window.
const DOCUMENT_CONTEXT_LIMIT: usize = 8_000;

const DOCUMENT_TRUNCATION_MARKER: &str = "\n\n[Document truncated due to length]";

pub fn text_only(message: &str) -> ModelPrompt {
    ModelPrompt::text_only(format!(
        "{SYSTEM_PROMPT}\n\nUSER'S QUESTION:\n{message}\n\n\
         Please provide a helpful, informative response following all the rules above."
    ))
}

pub fn image_analysis(message: &str, mime: &str, data: Bytes) -> ModelPrompt {
    let text = format!(
        "{SYSTEM_PROMPT}\n\nUser's message: {message}\n\n\
         Please analyze this image for health-related content. Remember: Do not diagnose, \
         only provide educational information about what you see."
    );
    ModelPrompt::with_image(text, mime.to_string(), data)
}

pub fn document_context(message: &str, document_text: &str) -> ModelPrompt {
    let mut context = document_text.to_string();
    if context.chars().count() > DOCUMENT_CONTEXT_LIMIT {
        context = context.chars().take(DOCUMENT_CONTEXT_LIMIT).collect();
        context.push_str(DOCUMENT_TRUNCATION_MARKER);
    }

    ModelPrompt::text_only(format!(
        "{SYSTEM_PROMPT}\n\n\
         DOCUMENT CONTENT (for context only):\n{context}\n\n\
         USER'S QUESTION:\n{message}\n\n\
         INSTRUCTIONS:\n\
         1. Explain medical terminology found in the document\n\
         2. Do NOT interpret results or provide diagnoses\n\
         3. Suggest what type of healthcare professional to consult\n\
         4. Include important disclaimers"
    ))
}
