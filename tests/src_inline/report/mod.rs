use super::*;
use crate::model::Sex;
use crate::pipeline::aggregate::BestScore;

fn ranking(scores: &[(&str, f64)]) -> BestScores {
    BestScores {
        entries: scores
            .iter()
            .map(|(name, score)| BestScore {
                name: name.to_string(),
                score: Some(*score),
            })
            .collect(),
    }
}

fn women_72() -> Filter {
    Filter::new(Sex::Female, "72", "FFForce").unwrap()
}

#[test]
fn test_placeholder_for_empty_ranking() {
    let scene = render_scene(&BestScores::default(), None, &women_72(), &Settings::default());
    assert_eq!(scene.title, "No data for F, 72kg (FFForce)");
    assert_eq!(scene.body, SceneBody::Placeholder);
    assert!(scene.distribution().is_none());
    assert!(scene.annotation().is_none());
}

#[test]
fn test_distribution_scene() {
    let best = ranking(&[("Ana Dvorák", 450.2), ("Jana Nováková", 430.0)]);
    let scene = render_scene(&best, None, &women_72(), &Settings::default());
    assert_eq!(scene.title, "GL Points distribution (F, 72kg, FFForce)");
    assert_eq!(scene.x_label, "GL Points");
    assert_eq!(scene.y_label, "Density");

    let dist = scene.distribution().unwrap();
    assert_eq!(dist.bins.len(), 30);
    assert_eq!(dist.histogram_label, "Best GL Points");
    assert_eq!(dist.curve_label, "Normal fit (μ=440.1, σ=14.3)");
    assert_eq!(dist.curve.first().unwrap().0, 425.0);
    assert_eq!(dist.curve.last().unwrap().0, 456.0);
    assert_eq!(dist.x_range, (425.0, 456.0));
    assert!(dist.y_max > 0.0);
    assert!(dist.marker.is_none());
}

#[test]
fn test_selection_adds_marker_and_annotation() {
    let best = ranking(&[("Ana Dvorák", 450.2), ("Jana Nováková", 430.0)]);
    let selection = Selection {
        name: "Ana Dvorák".to_string(),
        score: Some(450.2),
        rank: 1,
    };
    let scene = render_scene(&best, Some(&selection), &women_72(), &Settings::default());
    let marker = scene.distribution().unwrap().marker.as_ref().unwrap();
    assert_eq!(marker.score, 450.2);

    let ann = scene.annotation().unwrap();
    assert_eq!(ann.name, "Ana Dvorák");
    assert!((ann.z_score.unwrap() - 0.7071).abs() < 1e-4);
    assert_eq!(ann.percentile, 100.0);
}

#[test]
fn test_single_athlete_has_no_curve_and_undefined_z() {
    let best = ranking(&[("Solo", 312.4)]);
    let selection = Selection {
        name: "Solo".to_string(),
        score: Some(312.4),
        rank: 1,
    };
    let scene = render_scene(&best, Some(&selection), &women_72(), &Settings::default());
    let dist = scene.distribution().unwrap();
    assert!(dist.curve.is_empty());
    assert_eq!(dist.stats.std, 0.0);
    assert_eq!(scene.annotation().unwrap().z_score, None);
    assert_eq!(dist.bins.iter().map(|b| b.count).sum::<usize>(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let best = ranking(&[("A", 410.0), ("B", 402.5), ("C", 380.1), ("D", 379.9)]);
    let selection = Selection {
        name: "C".to_string(),
        score: Some(380.1),
        rank: 3,
    };
    let settings = Settings::default();
    let first = render_scene(&best, Some(&selection), &women_72(), &settings);
    let second = render_scene(&best, Some(&selection), &women_72(), &settings);
    assert_eq!(first, second);
}

#[test]
fn test_bin_count_follows_settings() {
    let best = ranking(&[("A", 410.0), ("B", 402.5), ("C", 380.1)]);
    let settings = Settings {
        bins: 12,
        ..Settings::default()
    };
    let scene = render_scene(&best, None, &women_72(), &settings);
    assert_eq!(scene.distribution().unwrap().bins.len(), 12);
}

#[test]
fn test_report_text_lists_top_athletes() {
    let best = ranking(&[("A", 410.0), ("B", 402.5), ("C", 380.1)]);
    let scene = render_scene(&best, None, &women_72(), &Settings::default());
    let text = text::render_report_text(&scene, &best, Some("info"), Some("oops"), 2);
    assert!(text.starts_with("GL Points distribution (F, 72kg, FFForce)\n"));
    assert!(text.contains("Athletes: 3"));
    assert!(text.contains("Top 2"));
    assert!(text.contains("   2. B"));
    assert!(!text.contains("   3. C"));
    assert!(text.contains("\ninfo\n"));
    assert!(text.ends_with("\noops\n"));
}

#[test]
fn test_message_lines() {
    let selection = Selection {
        name: "Ana Dvorák".to_string(),
        score: Some(450.2),
        rank: 1,
    };
    assert_eq!(
        text::info_line(&selection, 2, Some(0.70711), Some(100.0), "GL Points"),
        "Name: Ana Dvorák | GL Points: 450.2 | Rank: 1/2 | Z: 0.71 | Percentile: 100.0%"
    );
    assert_eq!(
        text::info_line(&selection, 1, None, Some(100.0), "GL Points"),
        "Name: Ana Dvorák | GL Points: 450.2 | Rank: 1/1 | Z: undefined | Percentile: 100.0%"
    );
    let scoreless = Selection {
        name: "Zed".to_string(),
        score: None,
        rank: 3,
    };
    assert_eq!(
        text::info_line(&scoreless, 3, None, None, "GL Points"),
        "Name: Zed | GL Points: n/a | Rank: 3/3 | Z: undefined | Percentile: n/a"
    );
    assert_eq!(
        text::not_found_line("smith", &women_72(), None),
        "Athlete 'smith' not found in F, 72kg."
    );
    assert_eq!(
        text::not_found_line("dvorka", &women_72(), Some("Ana Dvorák")),
        "Athlete 'dvorka' not found in F, 72kg. Did you mean 'Ana Dvorák'?"
    );
}

#[test]
fn test_scoreless_selection_has_no_marker() {
    let mut best = ranking(&[("Ana Dvorák", 450.2), ("Jana Nováková", 430.0)]);
    best.entries.push(BestScore {
        name: "Zed".to_string(),
        score: None,
    });
    let selection = Selection {
        name: "Zed".to_string(),
        score: None,
        rank: 3,
    };
    let scene = render_scene(&best, Some(&selection), &women_72(), &Settings::default());
    let dist = scene.distribution().unwrap();
    assert_eq!(dist.stats.n, 2);
    assert!(dist.marker.is_none());
    assert_eq!(dist.bins.iter().map(|b| b.count).sum::<usize>(), 2);

    let text = text::render_report_text(&scene, &best, None, None, 10);
    assert!(text.contains("Athletes: 3 (2 with a score)"));
    assert!(text.contains("   3. Zed"));
}

#[test]
fn test_only_scoreless_athletes_give_placeholder() {
    let best = BestScores {
        entries: vec![BestScore {
            name: "Zed".to_string(),
            score: None,
        }],
    };
    let scene = render_scene(&best, None, &women_72(), &Settings::default());
    assert_eq!(scene.body, SceneBody::Placeholder);
    let text = text::render_report_text(&scene, &best, None, None, 10);
    assert!(text.contains("Athletes: 1 (none with a score)"));

    let empty = text::render_report_text(&scene, &BestScores::default(), None, None, 10);
    assert!(empty.contains("No athletes match this filter."));
}
