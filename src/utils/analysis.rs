use std::fmt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::upload::{validate_scan, ScanFile, UploadError};

// The mock inference takes a fixed 3 seconds, standing in for a round trip
// to a real model.
pub const ANALYSIS_DELAY_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  HighRisk,
  CriticalRisk,
  NoRisk,
}

impl Severity {
  pub fn class_name(&self) -> &'static str {
    match self {
      Severity::HighRisk => "severity-high",
      Severity::CriticalRisk => "severity-critical",
      Severity::NoRisk => "severity-none",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::HighRisk => write!(f, "High Risk"),
      Severity::CriticalRisk => write!(f, "Critical Risk"),
      Severity::NoRisk => write!(f, "No Risk"),
    }
  }
}

// One of the three canned classifications. Confidence values are fixed per
// variant, never computed.
#[derive(Debug, PartialEq)]
pub struct Outcome {
  pub label: &'static str,
  pub confidence: Decimal,
  pub severity: Severity,
  pub icon: &'static str,
  pub tone: &'static str,
  pub recommendation: &'static str,
  pub details: &'static str,
}

static OUTCOMES: [Outcome; 3] = [
  Outcome {
    label: "NSCLC (Non-Small Cell Carcinoma)",
    confidence: dec!(94.7),
    severity: Severity::HighRisk,
    icon: "🔴",
    tone: "result-nsclc",
    recommendation: "Immediate medical consultation required. Early stage NSCLC detected with high confidence.",
    details: "Non-small cell lung carcinoma represents 85% of lung cancer cases. Early detection significantly improves treatment outcomes.",
  },
  Outcome {
    label: "SCLC (Small Cell Carcinoma)",
    confidence: dec!(89.3),
    severity: Severity::CriticalRisk,
    icon: "🟡",
    tone: "result-sclc",
    recommendation: "Urgent medical attention required. Aggressive form of lung cancer detected.",
    details: "Small cell lung carcinoma is more aggressive and spreads quickly. Immediate intervention is crucial.",
  },
  Outcome {
    label: "Benign Tissue",
    confidence: dec!(96.8),
    severity: Severity::NoRisk,
    icon: "🟢",
    tone: "result-benign",
    recommendation: "No cancerous tissue detected. Continue regular health screenings.",
    details: "Tissue appears normal with no signs of malignancy. Regular monitoring recommended.",
  },
];

// Case-insensitive substring match on the file name, "squamous" before
// "oat". Everything else is benign.
pub fn classify(file_name: &str) -> &'static Outcome {
  let name = file_name.to_lowercase();
  if name.contains("squamous") {
    &OUTCOMES[0]
  } else if name.contains("oat") {
    &OUTCOMES[1]
  } else {
    &OUTCOMES[2]
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
  Idle,
  FileSelected,
  Analyzing,
  ResultReady,
}

// Handed out by begin_analysis and presented back on completion. A ticket
// from a superseded run no longer matches the flow's epoch and commits
// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
  epoch: u64,
}

#[derive(Debug)]
pub struct DetectionFlow {
  state: UiState,
  file: Option<ScanFile>,
  outcome: Option<&'static Outcome>,
  epoch: u64,
}

impl DetectionFlow {
  pub fn new() -> Self {
    DetectionFlow {
      state: UiState::Idle,
      file: None,
      outcome: None,
      epoch: 0,
    }
  }

  pub fn state(&self) -> UiState {
    self.state
  }

  pub fn file(&self) -> Option<&ScanFile> {
    self.file.as_ref()
  }

  pub fn outcome(&self) -> Option<&'static Outcome> {
    self.outcome
  }

  // Accepts a scan after the validation gate. Rejections leave every field
  // untouched. A successful submission replaces the current file, clears
  // any previous outcome and invalidates pending completions, so selecting
  // a new scan mid-analysis supersedes the old run.
  pub fn submit_file(&mut self, file: ScanFile) -> Result<(), UploadError> {
    validate_scan(&file)?;
    self.epoch = self.epoch.wrapping_add(1);
    self.file = Some(file);
    self.outcome = None;
    self.state = UiState::FileSelected;
    Ok(())
  }

  // Only legal with a selected file. The caller owns the 3 second wait and
  // presents the ticket back through complete_analysis.
  pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
    if self.state != UiState::FileSelected {
      return None;
    }
    self.state = UiState::Analyzing;
    Some(AnalysisTicket { epoch: self.epoch })
  }

  // Commits the canned outcome for the current file name. Returns false,
  // with no observable effect, when the ticket is stale or the run was
  // reset underneath the wait.
  pub fn complete_analysis(&mut self, ticket: AnalysisTicket) -> bool {
    if ticket.epoch != self.epoch || self.state != UiState::Analyzing {
      return false;
    }
    let Some(file) = self.file.as_ref() else {
      return false;
    };
    self.outcome = Some(classify(&file.name));
    self.state = UiState::ResultReady;
    true
  }

  // Back to a blank session. Callable from any state; bumping the epoch
  // suppresses any completion still sleeping.
  pub fn reset(&mut self) {
    self.epoch = self.epoch.wrapping_add(1);
    self.file = None;
    self.outcome = None;
    self.state = UiState::Idle;
  }
}

impl Default for DetectionFlow {
  fn default() -> Self {
    DetectionFlow::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::upload::MAX_UPLOAD_BYTES;

  fn image(name: &str, size: u64) -> ScanFile {
    ScanFile {
      name: name.to_string(),
      size,
      content_type: "image/png".to_string(),
    }
  }

  fn flow_with(name: &str) -> DetectionFlow {
    let mut flow = DetectionFlow::new();
    flow.submit_file(image(name, 1024)).unwrap();
    flow
  }

  #[test]
  fn starts_idle_and_empty() {
    let flow = DetectionFlow::new();
    assert_eq!(flow.state(), UiState::Idle);
    assert!(flow.file().is_none());
    assert!(flow.outcome().is_none());
  }

  #[test]
  fn invalid_type_leaves_state_unchanged() {
    let mut flow = DetectionFlow::new();
    let err = flow
      .submit_file(ScanFile {
        name: "scan.pdf".to_string(),
        size: 1024,
        content_type: "application/pdf".to_string(),
      })
      .unwrap_err();
    assert!(matches!(err, UploadError::InvalidFileType(_)));
    assert_eq!(flow.state(), UiState::Idle);
    assert!(flow.file().is_none());
  }

  #[test]
  fn oversize_file_leaves_prior_selection_intact() {
    let mut flow = flow_with("first.png");
    let err = flow.submit_file(image("oat_cell.png", 12 * 1024 * 1024)).unwrap_err();
    assert!(matches!(err, UploadError::FileTooLarge(_)));
    assert_eq!(flow.state(), UiState::FileSelected);
    assert_eq!(flow.file().unwrap().name, "first.png");
  }

  #[test]
  fn boundary_size_is_accepted() {
    let mut flow = DetectionFlow::new();
    assert!(flow.submit_file(image("edge.png", MAX_UPLOAD_BYTES)).is_ok());
    assert_eq!(flow.state(), UiState::FileSelected);
  }

  #[test]
  fn happy_path_reaches_result_ready() {
    let mut flow = flow_with("chest_xray.png");
    let ticket = flow.begin_analysis().unwrap();
    assert_eq!(flow.state(), UiState::Analyzing);
    assert!(flow.complete_analysis(ticket));
    assert_eq!(flow.state(), UiState::ResultReady);
    assert!(flow.outcome().is_some());
  }

  #[test]
  fn squamous_names_classify_as_nsclc() {
    let outcome = classify("patient_squamous_01.png");
    assert_eq!(outcome.label, "NSCLC (Non-Small Cell Carcinoma)");
    assert_eq!(outcome.confidence, dec!(94.7));
    assert_eq!(outcome.severity.to_string(), "High Risk");
  }

  #[test]
  fn classification_ignores_case() {
    assert_eq!(classify("SQUAMOUS.PNG").severity, Severity::HighRisk);
    assert_eq!(classify("Oat_Cell.jpeg").severity, Severity::CriticalRisk);
  }

  #[test]
  fn squamous_takes_precedence_over_oat() {
    let outcome = classify("squamous_vs_oat.png");
    assert_eq!(outcome.severity, Severity::HighRisk);
  }

  #[test]
  fn oat_names_classify_as_sclc() {
    let outcome = classify("oat_cell.png");
    assert_eq!(outcome.confidence, dec!(89.3));
    assert_eq!(outcome.severity.to_string(), "Critical Risk");
  }

  #[test]
  fn other_names_classify_as_benign() {
    let outcome = classify("routine_checkup.jpeg");
    assert_eq!(outcome.label, "Benign Tissue");
    assert_eq!(outcome.confidence, dec!(96.8));
    assert_eq!(outcome.severity.to_string(), "No Risk");
  }

  #[test]
  fn scenario_squamous_scan_end_to_end() {
    let mut flow = DetectionFlow::new();
    flow.submit_file(image("patient_squamous_01.png", 2 * 1024 * 1024)).unwrap();
    let ticket = flow.begin_analysis().unwrap();
    assert!(flow.complete_analysis(ticket));
    let outcome = flow.outcome().unwrap();
    assert_eq!(outcome.confidence, dec!(94.7));
    assert_eq!(outcome.severity, Severity::HighRisk);
  }

  #[test]
  fn scenario_oversize_oat_image_is_rejected_outright() {
    let mut flow = DetectionFlow::new();
    let err = flow.submit_file(image("oat_cell.png", 12 * 1024 * 1024)).unwrap_err();
    assert!(matches!(err, UploadError::FileTooLarge(_)));
    assert_eq!(flow.state(), UiState::Idle);
    assert!(flow.file().is_none());
  }

  #[test]
  fn analysis_requires_a_selected_file() {
    let mut flow = DetectionFlow::new();
    assert!(flow.begin_analysis().is_none());

    let mut flow = flow_with("scan.png");
    let ticket = flow.begin_analysis().unwrap();
    // Already analyzing: a second start is refused.
    assert!(flow.begin_analysis().is_none());
    flow.complete_analysis(ticket);
    // Result is up: the run must be reset or superseded first.
    assert!(flow.begin_analysis().is_none());
  }

  #[test]
  fn reset_suppresses_pending_completion() {
    let mut flow = flow_with("scan.png");
    let ticket = flow.begin_analysis().unwrap();
    flow.reset();
    assert!(!flow.complete_analysis(ticket));
    assert_eq!(flow.state(), UiState::Idle);
    assert!(flow.outcome().is_none());
  }

  #[test]
  fn new_file_supersedes_pending_completion() {
    let mut flow = flow_with("patient_squamous_01.png");
    let stale = flow.begin_analysis().unwrap();

    flow.submit_file(image("oat_cell.png", 1024)).unwrap();
    assert_eq!(flow.state(), UiState::FileSelected);
    // The first run's completion lands late and is discarded.
    assert!(!flow.complete_analysis(stale));
    assert!(flow.outcome().is_none());

    let ticket = flow.begin_analysis().unwrap();
    assert!(flow.complete_analysis(ticket));
    // Only the second file's name decides the outcome.
    assert_eq!(flow.outcome().unwrap().severity, Severity::CriticalRisk);
  }

  #[test]
  fn replacing_a_file_clears_the_previous_outcome() {
    let mut flow = flow_with("scan.png");
    let ticket = flow.begin_analysis().unwrap();
    flow.complete_analysis(ticket);
    assert!(flow.outcome().is_some());

    flow.submit_file(image("second.png", 1024)).unwrap();
    assert_eq!(flow.state(), UiState::FileSelected);
    assert!(flow.outcome().is_none());
    assert_eq!(flow.file().unwrap().name, "second.png");
  }

  #[test]
  fn reset_is_idempotent() {
    let mut flow = flow_with("scan.png");
    flow.reset();
    assert_eq!(flow.state(), UiState::Idle);
    flow.reset();
    assert_eq!(flow.state(), UiState::Idle);
    assert!(flow.file().is_none());
    assert!(flow.outcome().is_none());
  }
}
