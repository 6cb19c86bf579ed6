use super::*;
use crate::model::ResultRecord;

fn record(name: &str, sex: Sex, class: &str, score: f64) -> ResultRecord {
    ResultRecord {
        name: name.to_string(),
        sex: Some(sex),
        weight_class: class.to_string(),
        federation: "FFForce".to_string(),
        score: Some(score),
    }
}

fn dataset() -> Dataset {
    Dataset::new(vec![
        record("Ana Dvorák", Sex::Female, "72", 450.2),
        record("Ana Dvorák", Sex::Female, "72", 441.0),
        record("Jana Nováková", Sex::Female, "72", 430.0),
        record("Lea Martin", Sex::Female, "47", 380.5),
        record("Marc Dupont", Sex::Male, "93", 412.3),
        record("Paul Roy", Sex::Male, "93", 398.0),
    ])
}

fn women_72(data: &Dataset, settings: &Settings) -> Session {
    let mut session = Session::new(data, settings).unwrap();
    session.dispatch(Intent::SexChanged(Sex::Female), data, settings).unwrap();
    session
        .dispatch(Intent::WeightClassChanged("72".to_string()), data, settings)
        .unwrap();
    session
}

#[test]
fn test_initial_state() {
    let data = dataset();
    let session = Session::new(&data, &Settings::default()).unwrap();
    assert_eq!(session.state.filter.sex, Sex::Male);
    assert_eq!(session.state.filter.weight_class, "93");
    assert_eq!(session.state.filter.federation, "FFForce");
    assert!(session.state.selection.is_none());
    assert!(session.state.last_error.is_none());
    assert!(session.state.last_info.is_none());
    assert_eq!(session.best.len(), 2);
    assert_eq!(
        session.scene.title,
        "GL Points distribution (M, 93kg, FFForce)"
    );
}

#[test]
fn test_search_accent_insensitive_hit() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);

    let redrawn = session
        .dispatch(Intent::NameSubmitted("dvorak".to_string()), &data, &settings)
        .unwrap();
    assert!(redrawn);

    let selection = session.state.selection.as_ref().unwrap();
    assert_eq!(selection.name, "Ana Dvorák");
    assert_eq!(selection.score, Some(450.2));
    assert_eq!(selection.rank, 1);
    assert_eq!(
        session.state.last_info.as_deref(),
        Some("Name: Ana Dvorák | GL Points: 450.2 | Rank: 1/2 | Z: 0.71 | Percentile: 100.0%")
    );
    assert!(session.state.last_error.is_none());
    assert_eq!(session.scene.annotation().unwrap().name, "Ana Dvorák");
}

#[test]
fn test_search_miss_keeps_scene() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);
    session
        .dispatch(Intent::NameSubmitted("novak".to_string()), &data, &settings)
        .unwrap();
    assert!(session.state.selection.is_some());
    let before = session.scene.clone();

    let redrawn = session
        .dispatch(Intent::NameSubmitted("smith".to_string()), &data, &settings)
        .unwrap();
    assert!(!redrawn);
    assert!(session.state.selection.is_none());
    assert!(session.state.last_info.is_none());
    assert_eq!(
        session.state.last_error.as_deref(),
        Some("Athlete 'smith' not found in F, 72kg.")
    );
    assert_eq!(session.scene, before);
}

#[test]
fn test_search_miss_offers_suggestion() {
    let data = dataset();
    let settings = Settings::default();
    let session = women_72(&data, &settings);
    let step = transition(
        &session.state,
        Intent::NameSubmitted("dvorka".to_string()),
        &data,
        &settings,
    )
    .unwrap();
    assert!(step.rerender.is_none());
    assert_eq!(
        step.next.last_error.as_deref(),
        Some("Athlete 'dvorka' not found in F, 72kg. Did you mean 'Ana Dvorák'?")
    );
}

#[test]
fn test_hit_clears_previous_error() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);
    session
        .dispatch(Intent::NameSubmitted("smith".to_string()), &data, &settings)
        .unwrap();
    assert!(session.state.last_error.is_some());
    session
        .dispatch(Intent::NameSubmitted("JANA".to_string()), &data, &settings)
        .unwrap();
    assert!(session.state.last_error.is_none());
    assert_eq!(session.state.selection.as_ref().unwrap().rank, 2);
}

#[test]
fn test_sex_switch_resets_class_and_selection() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = Session::new(&data, &settings).unwrap();
    session
        .dispatch(Intent::NameSubmitted("marc".to_string()), &data, &settings)
        .unwrap();
    assert!(session.state.selection.is_some());
    session
        .dispatch(Intent::NameSubmitted("nobody".to_string()), &data, &settings)
        .unwrap();
    assert!(session.state.last_error.is_some());

    session
        .dispatch(Intent::SexChanged(Sex::Female), &data, &settings)
        .unwrap();
    assert_eq!(session.state.filter.sex, Sex::Female);
    assert_eq!(session.state.filter.weight_class, "47");
    assert!(session.state.selection.is_none());
    assert!(session.state.last_info.is_none());
    assert!(session.state.last_error.is_none());
    assert_eq!(session.best.len(), 1);
    assert!(session.scene.annotation().is_none());
}

#[test]
fn test_unknown_weight_class_leaves_state() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = Session::new(&data, &settings).unwrap();
    let before = session.state.clone();

    let err = session
        .dispatch(Intent::WeightClassChanged("72".to_string()), &data, &settings)
        .unwrap_err();
    assert_eq!(
        err,
        ControlError::UnknownWeightClass {
            sex: Sex::Male,
            class: "72".to_string(),
            allowed: "59, 66, 74, 83, 93, 105, 120+".to_string(),
        }
    );
    assert_eq!(session.state, before);
}

#[test]
fn test_empty_class_renders_placeholder() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = Session::new(&data, &settings).unwrap();
    session
        .dispatch(Intent::WeightClassChanged("120+".to_string()), &data, &settings)
        .unwrap();
    assert!(session.best.is_empty());
    assert_eq!(session.scene.title, "No data for M, 120+kg (FFForce)");
}

#[test]
fn test_export_view_carries_messages() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);
    session
        .dispatch(Intent::NameSubmitted("zzz".to_string()), &data, &settings)
        .unwrap();
    let view = session.export_view();
    assert!(view.info.is_none());
    assert_eq!(view.error, Some("Athlete 'zzz' not found in F, 72kg."));
    assert_eq!(view.athletes.len(), 2);
}

#[test]
fn test_class_change_clears_selection_and_messages() {
    let data = dataset();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);
    session
        .dispatch(Intent::NameSubmitted("dvorak".to_string()), &data, &settings)
        .unwrap();
    assert!(session.scene.annotation().is_some());
    session
        .dispatch(Intent::NameSubmitted("smith".to_string()), &data, &settings)
        .unwrap();
    assert!(session.state.last_error.is_some());

    let redrawn = session
        .dispatch(Intent::WeightClassChanged("84".to_string()), &data, &settings)
        .unwrap();
    assert!(redrawn);
    assert_eq!(session.state.filter.weight_class, "84");
    assert!(session.state.selection.is_none());
    assert!(session.state.last_info.is_none());
    assert!(session.state.last_error.is_none());
    assert!(session.scene.annotation().is_none());
    assert_eq!(session.scene.title, "No data for F, 84kg (FFForce)");
}

fn dataset_with_disqualified() -> Dataset {
    let mut data = dataset();
    data.records.push(ResultRecord {
        score: None,
        ..record("Zed Roe", Sex::Female, "72", 0.0)
    });
    data
}

#[test]
fn test_rank_total_counts_scoreless_athletes() {
    let data = dataset_with_disqualified();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);
    assert_eq!(session.best.len(), 3);

    session
        .dispatch(Intent::NameSubmitted("jana".to_string()), &data, &settings)
        .unwrap();
    assert_eq!(
        session.state.last_info.as_deref(),
        Some("Name: Jana Nováková | GL Points: 430.0 | Rank: 2/3 | Z: -0.71 | Percentile: 50.0%")
    );
}

#[test]
fn test_scoreless_athlete_is_found_without_marker() {
    let data = dataset_with_disqualified();
    let settings = Settings::default();
    let mut session = women_72(&data, &settings);

    let redrawn = session
        .dispatch(Intent::NameSubmitted("zed".to_string()), &data, &settings)
        .unwrap();
    assert!(redrawn);
    let selection = session.state.selection.as_ref().unwrap();
    assert_eq!(selection.rank, 3);
    assert_eq!(selection.score, None);
    assert!(session.state.last_error.is_none());
    assert_eq!(
        session.state.last_info.as_deref(),
        Some("Name: Zed Roe | GL Points: n/a | Rank: 3/3 | Z: undefined | Percentile: n/a")
    );
    assert!(session.scene.annotation().is_none());
    assert_eq!(session.scene.distribution().unwrap().stats.n, 2);
}
