//! Clinical form inputs for the prediction routes and their conversion into
//! classifier feature vectors. The derived categorical buckets match the
//! encoding the classifiers were trained against; the band edges are part of
//! the external contract and must not drift.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ObservationError(pub String);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiabetesObservation {
    pub pregnancies: f32,
    pub glucose: f32,
    pub blood_pressure: f32,
    pub skin_thickness: f32,
    pub insulin: f32,
    pub bmi: f32,
    pub diabetes_pedigree: f32,
    pub age: f32,
}

impl DiabetesObservation {
    pub fn validate(&self) -> Result<(), ObservationError> {
        if !(0.0..=20.0).contains(&self.pregnancies) || !(0.0..=120.0).contains(&self.age) {
            return Err(ObservationError(
                "Please enter valid values for pregnancies (0-20) and age (0-120)".to_string(),
            ));
        }
        Ok(())
    }

    /// Raw fields followed by the one-hot BMI, insulin, and glucose bands,
    /// in training order. 18 features total.
    pub fn features(&self) -> Vec<f32> {
        let bmi_underweight = flag(self.bmi <= 18.5);
        let bmi_overweight = flag(self.bmi > 24.9 && self.bmi <= 29.9);
        let bmi_obesity_1 = flag(self.bmi > 29.9 && self.bmi <= 34.9);
        let bmi_obesity_2 = flag(self.bmi > 34.9 && self.bmi <= 39.9);
        let bmi_obesity_3 = flag(self.bmi > 39.9);

        let insulin_normal = flag((16.0..=166.0).contains(&self.insulin));

        let (glucose_low, glucose_normal, glucose_overweight, glucose_secret) =
            if self.glucose <= 70.0 {
                (1.0, 0.0, 0.0, 0.0)
            } else if self.glucose <= 99.0 {
                (0.0, 1.0, 0.0, 0.0)
            } else if self.glucose <= 126.0 {
                (0.0, 0.0, 1.0, 0.0)
            } else {
                (0.0, 0.0, 0.0, 1.0)
            };

        vec![
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree,
            self.age,
            bmi_underweight,
            bmi_overweight,
            bmi_obesity_1,
            bmi_obesity_2,
            bmi_obesity_3,
            insulin_normal,
            glucose_low,
            glucose_normal,
            glucose_overweight,
            glucose_secret,
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeartObservation {
    pub age: f32,
    pub sex: f32,
    pub cp: f32,
    pub trestbps: f32,
    pub chol: f32,
    pub fbs: f32,
    pub restecg: f32,
    pub thalach: f32,
    pub exang: f32,
    pub oldpeak: f32,
    pub slope: f32,
    pub ca: f32,
    pub thal: f32,
}

impl HeartObservation {
    pub fn validate(&self) -> Result<(), ObservationError> {
        if !(0.0..=3.0).contains(&self.cp)
            || !(0.0..=1.0).contains(&self.fbs)
            || !(0.0..=2.0).contains(&self.restecg)
        {
            return Err(ObservationError(
                "Please enter valid values for all fields".to_string(),
            ));
        }
        Ok(())
    }

    pub fn features(&self) -> Vec<f32> {
        vec![
            self.age,
            self.sex,
            self.cp,
            self.trestbps,
            self.chol,
            self.fbs,
            self.restecg,
            self.thalach,
            self.exang,
            self.oldpeak,
            self.slope,
            self.ca,
            self.thal,
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KidneyObservation {
    pub age: f32,
    pub blood_pressure: f32,
    pub specific_gravity: f32,
    pub albumin: f32,
    pub sugar: f32,
    pub red_blood_cells: f32,
    pub pus_cell: f32,
    pub pus_cell_clumps: f32,
    pub bacteria: f32,
    pub blood_glucose_random: f32,
    pub blood_urea: f32,
    pub serum_creatinine: f32,
    pub sodium: f32,
    pub potassium: f32,
    pub haemoglobin: f32,
    pub packed_cell_volume: f32,
    pub white_blood_cell_count: f32,
    pub red_blood_cell_count: f32,
    pub hypertension: f32,
    pub diabetes_mellitus: f32,
    pub coronary_artery_disease: f32,
    pub appetite: f32,
    pub peda_edema: f32,
    pub aanemia: f32,
}

impl KidneyObservation {
    pub fn validate(&self) -> Result<(), ObservationError> {
        let binary_fields = [
            self.hypertension,
            self.diabetes_mellitus,
            self.coronary_artery_disease,
            self.appetite,
            self.peda_edema,
            self.aanemia,
        ];
        if binary_fields.iter().any(|v| *v != 0.0 && *v != 1.0) {
            return Err(ObservationError(
                "Please enter valid values (0 or 1) for binary fields".to_string(),
            ));
        }
        Ok(())
    }

    pub fn features(&self) -> Vec<f32> {
        vec![
            self.age,
            self.blood_pressure,
            self.specific_gravity,
            self.albumin,
            self.sugar,
            self.red_blood_cells,
            self.pus_cell,
            self.pus_cell_clumps,
            self.bacteria,
            self.blood_glucose_random,
            self.blood_urea,
            self.serum_creatinine,
            self.sodium,
            self.potassium,
            self.haemoglobin,
            self.packed_cell_volume,
            self.white_blood_cell_count,
            self.red_blood_cell_count,
            self.hypertension,
            self.diabetes_mellitus,
            self.coronary_artery_disease,
            self.appetite,
            self.peda_edema,
            self.aanemia,
        ]
    }
}

fn flag(condition: bool) -> f32 {
    if condition { 1.0 } else { 0.0 }
}
