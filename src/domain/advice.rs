use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Disease {
    Diabetes,
    Heart,
    Kidney,
}

impl Disease {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Heart => "heart",
            Self::Kidney => "kidney",
        }
    }

    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::Heart, Disease::Kidney];
}

/// Static guidance bundle shown alongside a prediction outcome. This is a
/// fixed lookup table keyed by (disease, outcome), not model output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthAdvice {
    pub general_tips: Vec<&'static str>,
    pub doctor_visit: &'static str,
    pub resources: Vec<&'static str>,
}

impl HealthAdvice {
    pub fn for_outcome(disease: Disease, has_condition: bool) -> Self {
        match (disease, has_condition) {
            (Disease::Diabetes, true) => Self {
                general_tips: vec![
                    "Monitor your blood sugar levels regularly",
                    "Follow a balanced diet low in simple carbohydrates",
                    "Engage in regular physical activity",
                    "Take prescribed medications as directed",
                ],
                doctor_visit:
                    "Schedule an appointment with an endocrinologist or your primary care physician",
                resources: vec![
                    "American Diabetes Association: www.diabetes.org",
                    "National Institute of Diabetes and Digestive and Kidney Diseases: www.niddk.nih.gov",
                ],
            },
            (Disease::Diabetes, false) => Self {
                general_tips: vec![
                    "Maintain a healthy weight",
                    "Exercise regularly (at least 150 minutes per week)",
                    "Limit sugar and refined carbohydrate intake",
                    "Get regular health checkups",
                ],
                doctor_visit: "",
                resources: vec![],
            },
            (Disease::Heart, true) => Self {
                general_tips: vec![
                    "Follow a heart-healthy diet (Mediterranean diet recommended)",
                    "Quit smoking if you currently smoke",
                    "Manage stress through relaxation techniques",
                    "Take all prescribed medications regularly",
                ],
                doctor_visit: "Schedule an appointment with a cardiologist immediately",
                resources: vec![
                    "American Heart Association: www.heart.org",
                    "Cardiology department at your nearest hospital",
                ],
            },
            (Disease::Heart, false) => Self {
                general_tips: vec![
                    "Maintain healthy blood pressure and cholesterol levels",
                    "Exercise for at least 30 minutes most days",
                    "Eat a diet rich in fruits, vegetables, and whole grains",
                    "Avoid tobacco products",
                ],
                doctor_visit: "",
                resources: vec![],
            },
            (Disease::Kidney, true) => Self {
                general_tips: vec![
                    "Monitor blood pressure regularly",
                    "Reduce sodium intake",
                    "Stay hydrated with water",
                    "Avoid NSAIDs (like ibuprofen) unless prescribed",
                ],
                doctor_visit: "Schedule an appointment with a nephrologist as soon as possible",
                resources: vec![
                    "National Kidney Foundation: www.kidney.org",
                    "Your local nephrology center",
                ],
            },
            (Disease::Kidney, false) => Self {
                general_tips: vec![
                    "Drink plenty of water",
                    "Maintain healthy blood pressure",
                    "Limit salt and processed foods",
                    "Get regular kidney function tests if at risk",
                ],
                doctor_visit: "",
                resources: vec![],
            },
        }
    }
}
