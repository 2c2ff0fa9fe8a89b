// src/config/fields.rs

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text, entered as a number but kept as a string.
    Number,
    /// One of a fixed set of option strings, sent verbatim.
    Choice(&'static [&'static str]),
    /// Comma-separated values, sent as a JSON array of trimmed strings.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Number }
    }

    pub const fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, label, kind: FieldKind::Choice(options) }
    }

    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::List }
    }
}

/// Static description of one page: what it asks for and where it sends it.
#[derive(Debug, PartialEq)]
pub struct FormSchema {
    pub title: &'static str,
    pub endpoint: &'static str,
    pub fields: &'static [FieldSpec],
    /// Overrides the generic "Please fill in all fields" message.
    pub required_message: Option<&'static str>,
    pub failure_message: &'static str,
    pub submit_label: &'static str,
    pub placeholder: &'static str,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const YES_NO: &[&str] = &["Yes", "No"];

pub const SYMPTOMS_FORM: FormSchema = FormSchema {
    title: "AI Health Analysis",
    endpoint: "/api/analyze",
    fields: &[FieldSpec::list("symptoms", "Symptoms")],
    required_message: Some("Please enter at least one symptom"),
    failure_message: "Failed to analyze symptoms. Please try again.",
    submit_label: "Analyze Symptoms",
    placeholder: "Enter your symptoms and click \"Analyze Symptoms\" to get started.",
};

pub const PREGNANCY_FORM: FormSchema = FormSchema {
    title: "Pregnancy Risk Analysis",
    endpoint: "/api/pregnancy",
    fields: &[
        FieldSpec::number("age", "Age"),
        FieldSpec::number("diastolicBP", "Diastolic Blood Pressure"),
        FieldSpec::number("BS", "Blood Sugar"),
        FieldSpec::number("bodyTemp", "Body Temperature"),
        FieldSpec::number("heartRate", "Heart Rate"),
    ],
    required_message: None,
    failure_message: "Failed to analyze pregnancy risk. Please try again.",
    submit_label: "Analyze Pregnancy Risk",
    placeholder: "Enter your health parameters and click \"Analyze Pregnancy Risk\" to get started.",
};

pub const HEART_FORM: FormSchema = FormSchema {
    title: "Heart Disease Analysis",
    endpoint: "/api/heart",
    fields: &[
        FieldSpec::number("age", "Age"),
        FieldSpec::choice("sex", "Sex", &["Male", "Female"]),
        FieldSpec::choice(
            "cp",
            "Chest Pain Type",
            &["Low pain", "Mild pain", "Moderate pain", "Extreme pain"],
        ),
        FieldSpec::number("trestbps", "Resting Blood Pressure"),
        FieldSpec::number("chol", "Cholesterol"),
        FieldSpec::choice("fbs", "Fasting Blood Sugar > 120 mg/dl", YES_NO),
        FieldSpec::number("restecg", "Resting ECG Results"),
        FieldSpec::number("thalach", "Maximum Heart Rate"),
        FieldSpec::choice("exang", "Exercise Induced Angina", YES_NO),
        FieldSpec::number("oldpeak", "ST Depression"),
        FieldSpec::number("slope", "Slope of Peak Exercise ST"),
        FieldSpec::number("ca", "Number of Major Vessels"),
        FieldSpec::choice(
            "thal",
            "Thalassemia",
            &[
                "Normal (No Thalassemia)",
                "Fixed Defect (Beta-thalassemia minor)",
                "Reversible Defect (Beta-thalassemia intermedia)",
                "Serious Defect (Beta-thalassemia major)",
            ],
        ),
    ],
    required_message: None,
    failure_message: "Failed to analyze heart condition. Please try again.",
    submit_label: "Analyze Heart Condition",
    placeholder: "Enter your health parameters and click \"Analyze Heart Condition\" to get started.",
};

pub const DIABETES_FORM: FormSchema = FormSchema {
    title: "Diabetes Analysis",
    endpoint: "/api/diabetes",
    fields: &[
        FieldSpec::number("Pregnancies", "Pregnancies"),
        FieldSpec::number("Glucose", "Glucose"),
        FieldSpec::number("BloodPressure", "Blood Pressure"),
        FieldSpec::number("SkinThickness", "Skin Thickness"),
        FieldSpec::number("Insulin", "Insulin"),
        FieldSpec::number("BMI", "BMI"),
        FieldSpec::number("DiabetesPedigreeFunction", "Diabetes Pedigree Function"),
        FieldSpec::number("Age", "Age"),
    ],
    required_message: None,
    failure_message: "Failed to analyze diabetes risk. Please try again.",
    submit_label: "Analyze Diabetes Risk",
    placeholder: "Enter your health parameters and click \"Analyze Diabetes Risk\" to get started.",
};
