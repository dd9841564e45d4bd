//! Deterministic train/test split.

use coalesce_core::models::TrainingSample;

/// Split `samples` into `(train, test)` with `ceil(n * test_fraction)`
/// samples held out, always leaving at least one for training.
///
/// Membership is decided by the blake3 digest of each sample's path and
/// feature values, so the split does not depend on the order rows came
/// back from the store. Exact duplicates keep their input order.
pub fn train_test_split(
    samples: &[TrainingSample],
    test_fraction: f64,
) -> (Vec<&TrainingSample>, Vec<&TrainingSample>) {
    let n = samples.len();
    if n == 0 {
        return (Vec::new(), Vec::new());
    }
    let test_count = ((n as f64 * test_fraction).ceil() as usize).min(n - 1);

    let mut keyed: Vec<([u8; 32], &TrainingSample)> = samples
        .iter()
        .map(|s| {
            let mut hasher = blake3::Hasher::new();
            hasher.update(s.unit_path.as_bytes());
            for value in &s.features {
                hasher.update(&value.to_le_bytes());
            }
            (*hasher.finalize().as_bytes(), s)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut test: Vec<&TrainingSample> = Vec::with_capacity(test_count);
    let mut train: Vec<&TrainingSample> = Vec::with_capacity(n - test_count);
    for (rank, (_, sample)) in keyed.into_iter().enumerate() {
        if rank < test_count {
            test.push(sample);
        } else {
            train.push(sample);
        }
    }
    (train, test)
}
