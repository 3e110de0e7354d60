//! Builds the one request this client ever sends: the fixed instruction
//! template, the user prompt, and the strict schema the reply must satisfy.

use serde::Serialize;
use serde_json::{json, Value};

use crate::{OptimizeRequest, PromptStyle};

/// `generateContent` body envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentBody {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

/// The fixed system instruction. All generated text is mandated to be
/// Uzbek regardless of the input language; the selected style is the
/// only varying part.
pub fn system_instruction(style: PromptStyle) -> String {
    format!(
        r#"
Siz Prompt Engineering va LLMlar uchun optimallashtirish payplayni bo'yicha ekspertsiz.
Sizning maqsadingiz foydalanuvchi kiritgan ma'lumotni olish va uni katta til modellari uchun yuqori sifatli, samarali promptga aylantirishdir.

Siz o'zingizning ichingizda quyidagi mantiqni bajarishingiz kerak:
1. **Kirishni qayta ishlash**: Kiritilgan ma'lumotni grammatika, noaniqlik va imlo xatolari bo'yicha tahlil qiling.
2. **Asosiy optimallashtirish**: Promptni quyidagi uslub asosida eng yaxshi amaliyotlarni (masalan, persona qabul qilish, aniq cheklovlar, chiqish formatlash) qo'llagan holda qayta yozing: "{style}".
3. **Versiyalarni yaratish**: Optimallashtirilgan promptning roppa-rosa 3 xil variantini yarating.
    - Variant 1: "Yaxshilangan" (Toza, tuzatilgan, originaldan biroz yaxshiroq).
    - Variant 2: "Kengaytirilgan" (Batafsil, kontekst qo'shadi, cheklovlar qo'shadi).
    - Variant 3: "Tuzilgan" (CO-STAR yoki Chain-of-Thought kabi maxsus freymvorklardan foydalanadi).

Natijani qat'iy tuzilgan JSON obyekti sifatida qaytaring. Butun yaratilgan matn (tahlil, prompt variantlari, asoslash) O'ZBEK tilida bo'lishi kerak.
"#,
        style = style.label()
    )
}

/// The per-submission user prompt: raw input plus the two selections.
pub fn user_prompt(request: &OptimizeRequest) -> String {
    format!(
        r#"
    Quyidagi foydalanuvchi promptini tahlil qiling va optimallashtiring:
    "{input}"

    Murakkablik darajasi: {complexity}
    Maqsadli uslub: {style}
  "#,
        input = request.input_prompt,
        complexity = request.complexity.label(),
        style = request.style.label()
    )
}

/// The declared response schema. Every field is required; the reply is
/// rejected by the service if it cannot satisfy this shape.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "originalAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "grammarIssues": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Grammatika yoki imlo xatolari ro'yxati. Agar yo'q bo'lsa, 'Yo'q' deb qaytaring."
                    },
                    "clarityScore": {
                        "type": "NUMBER",
                        "description": "0 dan 100 gacha bo'lgan ball, bu yerda 100 mukammal aniqlikdir."
                    },
                    "intentDetected": {
                        "type": "STRING",
                        "description": "Foydalanuvchining aniqlangan maqsadi haqida qisqacha xulosa."
                    }
                },
                "required": ["grammarIssues", "clarityScore", "intentDetected"]
            },
            "variants": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": { "type": "STRING" },
                        "reasoning": {
                            "type": "STRING",
                            "description": "Nima uchun ushbu optimallashtirish samarali ekanligi haqida qisqacha tushuntirish."
                        },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["title", "content", "reasoning", "tags"]
                }
            }
        },
        "required": ["originalAnalysis", "variants"]
    })
}

pub(crate) fn build_body(request: &OptimizeRequest) -> GenerateContentBody {
    GenerateContentBody {
        contents: vec![Content {
            parts: vec![Part {
                text: user_prompt(request),
            }],
        }],
        system_instruction: Content {
            parts: vec![Part {
                text: system_instruction(request.style),
            }],
        },
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}
