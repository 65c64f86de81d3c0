//! The focus view: one current item at a time.

use std::fmt;

use crate::models::{Plan, Progress};

/// Width of the rendered progress bar in cells.
const BAR_WIDTH: usize = 20;

/// Text progress bar such as `[#####---------------]`.
pub struct ProgressBar(pub Progress);

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Progress { completed, total } = self.0;
        let filled = if total == 0 {
            0
        } else {
            (completed.min(total) * BAR_WIDTH) / total
        };
        write!(
            f,
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled)
        )
    }
}

/// Wrapper that formats a plan as its focus view: goal, progress and the
/// current phase and item, or a completion message.
pub struct Focus<'a>(pub &'a Plan);

impl fmt::Display for Focus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let progress = plan.progress();

        writeln!(f, "# {}", plan.goal)?;
        writeln!(f)?;
        writeln!(f, "{} {progress}", ProgressBar(progress))?;
        writeln!(f)?;

        match (plan.current_phase(), plan.current_item()) {
            (Some(phase), Some(item)) => {
                writeln!(f, "## {}", phase.name)?;
                writeln!(f)?;
                writeln!(f, "**Now:** {}", item.name)?;
            }
            _ => {
                writeln!(f, "## All done!")?;
                writeln!(f)?;
                writeln!(f, "Every item in this plan is completed.")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::generate, models::Duration};

    #[test]
    fn test_progress_bar() {
        assert_eq!(
            ProgressBar(Progress::new(0, 10)).to_string(),
            "[--------------------]"
        );
        assert_eq!(
            ProgressBar(Progress::new(5, 10)).to_string(),
            "[##########----------]"
        );
        assert_eq!(
            ProgressBar(Progress::new(10, 10)).to_string(),
            "[####################]"
        );
        assert_eq!(
            ProgressBar(Progress::new(0, 0)).to_string(),
            "[--------------------]"
        );
    }

    #[test]
    fn test_focus_shows_current_item() {
        let plan = generate("다이어트", Duration::ThreeMonths, 1);
        let output = Focus(&plan).to_string();

        assert!(output.contains("# 다이어트"));
        assert!(output.contains("0 / 12 (0%)"));
        assert!(output.contains("## 준비"));
        assert!(output.contains("**Now:** 현재 상태 점검하기"));
    }

    #[test]
    fn test_focus_on_completed_plan() {
        let mut plan = generate("다이어트", Duration::ThreeMonths, 1);
        while plan.complete_current() {}
        let output = Focus(&plan).to_string();

        assert!(output.contains("12 / 12 (100%)"));
        assert!(output.contains("## All done!"));
        assert!(!output.contains("**Now:**"));
    }
}
