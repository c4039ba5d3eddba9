//! Session summary report
//!
//! Counts the records keyed in so far and estimates how far the onboarding
//! has progressed over four steps: students, guardians (or staff with a child
//! enrolled), staff, and links.

use crate::session::Session;

/// Number of onboarding steps tracked by the progress figure
pub const PROGRESS_STEPS: u32 = 4;

/// Summary of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub students: usize,
    pub guardians: usize,
    pub staff: usize,
    /// Staff members who also have a child enrolled
    pub staff_with_children: usize,
    pub links: usize,
}

impl SessionSummary {
    /// Generate the summary for `session`
    pub fn generate(session: &Session) -> Self {
        Self {
            students: session.students().len(),
            guardians: session.guardians().len(),
            staff: session.staff().len(),
            staff_with_children: session
                .staff()
                .iter()
                .filter(|s| s.has_child_enrolled)
                .count(),
            links: session.links().len(),
        }
    }

    /// Number of onboarding steps with at least one record
    pub fn completed_steps(&self) -> u32 {
        let steps = [
            self.students > 0,
            self.guardians > 0 || self.staff_with_children > 0,
            self.staff > 0,
            self.links > 0,
        ];
        steps.iter().filter(|done| **done).count() as u32
    }

    /// Completed steps as a rounded percentage
    pub fn progress(&self) -> u32 {
        (f64::from(self.completed_steps()) / f64::from(PROGRESS_STEPS) * 100.0).round() as u32
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        const BAR_WIDTH: u32 = 20;
        let filled = (self.progress() * BAR_WIDTH / 100) as usize;

        let mut output = String::new();
        output.push_str("Onboarding Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Students:               {:>6}\n", self.students));
        output.push_str(&format!("Guardians:              {:>6}\n", self.guardians));
        output.push_str(&format!("Staff:                  {:>6}\n", self.staff));
        output.push_str(&format!(
            "  with a child enrolled: {:>6}\n",
            self.staff_with_children
        ));
        output.push_str(&format!("Links:                  {:>6}\n", self.links));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Progress: [{}{}] {}%\n",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH as usize - filled),
            self.progress()
        ));

        output
    }
}
