use crate::domain::EXAM_TIPS;

/// Serve the static exam-tips list. No backend call, always succeeds.
pub struct ExamTipsUseCase;

impl ExamTipsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Vec<String> {
        EXAM_TIPS.iter().map(|tip| tip.to_string()).collect()
    }
}

impl Default for ExamTipsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_are_stable_and_ordered() {
        let use_case = ExamTipsUseCase::new();

        let first = use_case.execute();
        let second = use_case.execute();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert_eq!(first[0], "Start with a clear definition");
        assert_eq!(first[4], "Link answer to consumer welfare");
    }
}
