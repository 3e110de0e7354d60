//! Fixed display strings for the terminal UI.

pub const APP_TITLE: &str = "PromptTune";
pub const INPUT_TITLE: &str = "Prompt";
pub const INPUT_PLACEHOLDER: &str = "masalan, Kofe haqida blog post yoz...";
pub const STYLE_TITLE: &str = "Maqsadli Uslub";
pub const COMPLEXITY_TITLE: &str = "Murakkablik";
pub const SUBMIT_READY: &str = "Promptni Optimallashtirish [o]";
pub const SUBMIT_BUSY: &str = "Qayta ishlanmoqda...";
pub const RESULTS_PLACEHOLDER: &str = "Natijalar shu yerda ko'rinadi.";

/// Stage cells in display order: label plus short description.
pub const STAGE_CELLS: [(&str, &str); 4] = [
    ("Qayta ishlash", "Imlo tekshirish va Normalizatsiya"),
    ("Asosiy Optimizator", "Takomillashtirish va Uslub"),
    ("Versiya Yaratish", "Variantlar Yaratish"),
    ("Formatlovchi", "Tuzilgan Natija"),
];

pub const ANALYSIS_INTENT: &str = "Aniqlangan Maqsad";
pub const ANALYSIS_CLARITY: &str = "Aniqlik Balli";
pub const ANALYSIS_ISSUES: &str = "Tuzatilgan Muammolar";
pub const REASONING_PREFIX: &str = "Nima uchun bu ishlaydi: ";
pub const COPIED_BADGE: &str = "nusxalandi";

pub const HINTS_NORMAL: &str =
    "Tab: fokus | Enter: tahrirlash | o: optimallashtirish | e/r/a/c: variant | q: chiqish";
pub const HINTS_EDITING: &str = "Esc yoki Enter: tahrirni yakunlash";
