use pageflow_core::{ClassifierTuning, SourceClassifier};

fn feed(classifier: &mut SourceClassifier, deltas: &[f64]) {
    for delta in deltas {
        classifier.observe(*delta);
    }
}

#[test]
fn small_delta_latches_trackpad_immediately() {
    let mut classifier = SourceClassifier::new();
    classifier.observe(4.5);
    assert!(classifier.decided());
    assert!(classifier.is_trackpad());
}

#[test]
fn trackpad_verdict_survives_later_notch_samples() {
    let mut classifier = SourceClassifier::new();
    feed(&mut classifier, &[12.0, 120.0, 120.0, 240.0]);
    assert!(classifier.decided());
    assert!(classifier.is_trackpad());
}

#[test]
fn second_notch_sample_latches_wheel() {
    let mut classifier = SourceClassifier::new();
    classifier.observe(120.0);
    assert!(!classifier.decided());
    classifier.observe(-240.0);
    assert!(classifier.decided());
    assert!(!classifier.is_trackpad());
}

#[test]
fn wheel_verdict_survives_later_small_deltas() {
    let mut classifier = SourceClassifier::new();
    feed(&mut classifier, &[120.0, 120.0, 3.0, 7.0]);
    assert!(classifier.decided());
    assert!(!classifier.is_trackpad());
}

#[test]
fn ambiguous_samples_latch_default_at_three() {
    let mut classifier = SourceClassifier::new();
    feed(&mut classifier, &[60.0, 75.0]);
    assert!(!classifier.decided());
    classifier.observe(90.0);
    assert!(classifier.decided());
    assert!(!classifier.is_trackpad());
}

#[test]
fn zero_deltas_are_ignored() {
    let mut classifier = SourceClassifier::new();
    feed(&mut classifier, &[0.0, 0.0, 0.0, 0.0]);
    assert!(!classifier.decided());
}

#[test]
fn boundary_magnitudes_do_not_read_as_trackpad() {
    let mut classifier = SourceClassifier::new();
    classifier.observe(50.0);
    assert!(!classifier.decided());
    assert!(!classifier.is_trackpad());
}

#[test]
fn notch_and_ambiguous_samples_share_one_counter() {
    // One notch sample plus two inconclusive ones reach the ambiguous
    // threshold together, leaving the default verdict.
    let mut classifier = SourceClassifier::new();
    feed(&mut classifier, &[120.0, 60.0]);
    assert!(!classifier.decided());
    classifier.observe(60.0);
    assert!(classifier.decided());
    assert!(!classifier.is_trackpad());
}

#[test]
fn downward_and_upward_notches_both_count() {
    let mut classifier = SourceClassifier::new();
    feed(&mut classifier, &[-120.0, 360.0]);
    assert!(classifier.decided());
    assert!(!classifier.is_trackpad());
}

#[test]
fn tuning_overrides_apply() {
    let tuning = ClassifierTuning {
        trackpad_delta_max: 10.0,
        notch_delta: 100.0,
        notch_samples: 1,
        ambiguous_samples: 2,
    };
    let mut classifier = SourceClassifier::with_tuning(tuning);
    classifier.observe(40.0);
    assert!(!classifier.decided());
    classifier.observe(100.0);
    assert!(classifier.decided());
    assert!(!classifier.is_trackpad());

    let mut classifier = SourceClassifier::with_tuning(tuning);
    classifier.observe(9.0);
    assert!(classifier.decided());
    assert!(classifier.is_trackpad());
}
