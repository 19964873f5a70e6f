//! Candidate sequence validation.
//!
//! A candidate is a well-formed job sequence iff it is a permutation of
//! `0..nb_jobs`. Detects:
//! - Wrong length
//! - Job indices outside `0..nb_jobs`
//! - Jobs appearing more than once
//! - Jobs never appearing
//!
//! Validation never panics and never touches the instance; any malformed
//! candidate is simply classified invalid.

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Sequence length differs from the number of jobs.
    WrongLength,
    /// A job index is not below the number of jobs.
    OutOfRange,
    /// A job index appears more than once.
    DuplicateJob,
    /// A job index never appears.
    MissingJob,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whether `candidate` is a permutation of `0..nb_jobs`.
///
/// Checks the length first, then compares the sorted values against
/// `0..nb_jobs`, which catches duplicates, gaps, and out-of-range values
/// in one pass.
pub fn is_permutation(candidate: &[usize], nb_jobs: usize) -> bool {
    if candidate.len() != nb_jobs {
        return false;
    }
    let mut sorted = candidate.to_vec();
    sorted.sort_unstable();
    sorted.iter().copied().eq(0..nb_jobs)
}

/// Validates a candidate sequence, reporting every problem found.
///
/// Checks:
/// 1. Length equals `nb_jobs`
/// 2. Every index is in `0..nb_jobs`
/// 3. No index repeats
/// 4. Every job in `0..nb_jobs` appears
///
/// # Returns
/// `Ok(())` if the candidate is a permutation, `Err(errors)` otherwise.
pub fn validate_order(candidate: &[usize], nb_jobs: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if candidate.len() != nb_jobs {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongLength,
            format!(
                "Sequence has {} entries, expected {nb_jobs}",
                candidate.len()
            ),
        ));
    }

    let mut seen = vec![false; nb_jobs];
    for (position, &job) in candidate.iter().enumerate() {
        match seen.get_mut(job) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Job {job} at position {position} is out of range 0..{nb_jobs}"),
            )),
            Some(true) => errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateJob,
                format!("Job {job} appears again at position {position}"),
            )),
            Some(flag) => *flag = true,
        }
    }

    for (job, _) in seen.iter().enumerate().filter(|(_, &present)| !present) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingJob,
            format!("Job {job} is missing from the sequence"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
