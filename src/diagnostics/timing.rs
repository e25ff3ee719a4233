use serde::Serialize;

/// Wall-clock time spent in one labelled stage of a clustering run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings of one run, in execution order. `total_ms` also covers
/// validation and result assembly.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: &str, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.to_owned(),
            elapsed_ms,
        });
    }
}
