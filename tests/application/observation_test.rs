use healthdesk::application::services::{
    DiabetesObservation, HeartObservation, KidneyObservation,
};

fn diabetes(glucose: f32, bmi: f32, insulin: f32) -> DiabetesObservation {
    DiabetesObservation {
        glucose,
        bmi,
        insulin,
        ..Default::default()
    }
}

#[test]
fn given_diabetes_observation_when_building_features_then_vector_has_training_width() {
    let features = diabetes(120.0, 28.0, 100.0).features();

    assert_eq!(features.len(), 18);
    assert_eq!(features[1], 120.0);
    assert_eq!(features[5], 28.0);
}

#[test]
fn given_glucose_band_edges_when_building_features_then_one_hot_matches_training_encoding() {
    // [glucose_low, glucose_normal, glucose_overweight, glucose_secret] at indices 14..18
    let bands = |glucose: f32| -> Vec<f32> { diabetes(glucose, 22.0, 100.0).features()[14..18].to_vec() };

    assert_eq!(bands(70.0), vec![1.0, 0.0, 0.0, 0.0]);
    assert_eq!(bands(70.5), vec![0.0, 1.0, 0.0, 0.0]);
    assert_eq!(bands(99.0), vec![0.0, 1.0, 0.0, 0.0]);
    assert_eq!(bands(99.5), vec![0.0, 0.0, 1.0, 0.0]);
    assert_eq!(bands(126.0), vec![0.0, 0.0, 1.0, 0.0]);
    assert_eq!(bands(126.5), vec![0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn given_bmi_band_edges_when_building_features_then_one_hot_matches_training_encoding() {
    // [underweight, overweight, obesity_1, obesity_2, obesity_3] at indices 8..13
    let bands = |bmi: f32| -> Vec<f32> { diabetes(90.0, bmi, 100.0).features()[8..13].to_vec() };

    assert_eq!(bands(18.5), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
    // The normal range (18.5, 24.9] carries no flag at all.
    assert_eq!(bands(24.9), vec![0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(bands(25.0), vec![0.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(bands(29.9), vec![0.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(bands(30.0), vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(bands(35.0), vec![0.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(bands(40.0), vec![0.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn given_insulin_range_when_building_features_then_normal_flag_set_inside_16_to_166() {
    let insulin_flag = |insulin: f32| diabetes(90.0, 22.0, insulin).features()[13];

    assert_eq!(insulin_flag(15.9), 0.0);
    assert_eq!(insulin_flag(16.0), 1.0);
    assert_eq!(insulin_flag(166.0), 1.0);
    assert_eq!(insulin_flag(166.1), 0.0);
}

#[test]
fn given_out_of_range_pregnancies_or_age_when_validating_diabetes_then_rejects() {
    let mut observation = diabetes(90.0, 22.0, 100.0);
    observation.pregnancies = 21.0;
    assert!(observation.validate().is_err());

    let mut observation = diabetes(90.0, 22.0, 100.0);
    observation.age = 121.0;
    assert!(observation.validate().is_err());

    let mut observation = diabetes(90.0, 22.0, 100.0);
    observation.pregnancies = 2.0;
    observation.age = 45.0;
    assert!(observation.validate().is_ok());
}

#[test]
fn given_heart_observation_when_building_features_then_original_field_order_is_kept() {
    let observation = HeartObservation {
        age: 54.0,
        sex: 1.0,
        cp: 2.0,
        trestbps: 130.0,
        chol: 246.0,
        fbs: 0.0,
        restecg: 1.0,
        thalach: 150.0,
        exang: 0.0,
        oldpeak: 1.4,
        slope: 1.0,
        ca: 0.0,
        thal: 2.0,
    };

    let features = observation.features();
    assert_eq!(features.len(), 13);
    assert_eq!(features[0], 54.0);
    assert_eq!(features[3], 130.0);
    assert_eq!(features[12], 2.0);
}

#[test]
fn given_out_of_range_categorical_fields_when_validating_heart_then_rejects() {
    let observation = HeartObservation {
        cp: 4.0,
        ..Default::default()
    };
    assert!(observation.validate().is_err());

    let observation = HeartObservation {
        restecg: 3.0,
        ..Default::default()
    };
    assert!(observation.validate().is_err());

    let observation = HeartObservation {
        cp: 3.0,
        fbs: 1.0,
        restecg: 2.0,
        ..Default::default()
    };
    assert!(observation.validate().is_ok());
}

#[test]
fn given_kidney_observation_when_building_features_then_vector_has_training_width() {
    let observation = KidneyObservation {
        age: 48.0,
        blood_pressure: 80.0,
        serum_creatinine: 1.2,
        hypertension: 1.0,
        ..Default::default()
    };

    let features = observation.features();
    assert_eq!(features.len(), 24);
    assert_eq!(features[0], 48.0);
    assert_eq!(features[18], 1.0);
}

#[test]
fn given_non_binary_flag_when_validating_kidney_then_rejects() {
    let observation = KidneyObservation {
        diabetes_mellitus: 0.5,
        ..Default::default()
    };
    assert!(observation.validate().is_err());

    let observation = KidneyObservation {
        hypertension: 1.0,
        aanemia: 0.0,
        ..Default::default()
    };
    assert!(observation.validate().is_ok());
}
