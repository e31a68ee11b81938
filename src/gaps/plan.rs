//! Time-boxed improvement plans derived from a gap analysis

use crate::gaps::analyzer::{GapAnalysis, LearningRecommendation};
use serde::{Deserialize, Serialize};

/// One month's learning goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyMilestone {
    pub month: u32,
    pub skills_to_learn: Vec<String>,
    pub estimated_time: String,
    pub milestone: String,
}

/// A step-by-step plan for closing the skill gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementPlan {
    pub time_frame_months: u32,
    pub total_skills_to_learn: usize,
    /// Skills allotted to each populated month. Minimum 1 when there is
    /// anything to learn and at least one month to learn it in.
    pub skills_per_month: usize,
    pub monthly_milestones: Vec<MonthlyMilestone>,
    pub recommended_resources: Vec<LearningRecommendation>,
    pub action_steps: Vec<String>,
}

/// Spread the missing skills across the given time frame. Months are
/// filled front to back in consecutive chunks and the walk stops once
/// the skills run out, so late months may stay empty. A zero time frame
/// produces no milestones.
pub fn generate_improvement_plan(analysis: &GapAnalysis, time_frame_months: u32) -> ImprovementPlan {
    let missing = &analysis.missing_skills;

    let skills_per_month = if time_frame_months == 0 {
        0
    } else {
        usize::max(1, missing.len() / time_frame_months as usize)
    };

    let mut monthly_milestones = Vec::new();
    if skills_per_month > 0 {
        for month in 1..=time_frame_months {
            let start = (month as usize - 1) * skills_per_month;
            if start >= missing.len() {
                break;
            }
            let end = usize::min(start + skills_per_month, missing.len());
            let month_skills = missing[start..end].to_vec();

            monthly_milestones.push(MonthlyMilestone {
                month,
                estimated_time: format!("{}-4 weeks", month_skills.len() * 2),
                milestone: format!("Month {} Goal: Learn {} skills", month, month_skills.len()),
                skills_to_learn: month_skills,
            });
        }
    }

    ImprovementPlan {
        time_frame_months,
        total_skills_to_learn: missing.len(),
        skills_per_month,
        monthly_milestones,
        recommended_resources: analysis.learning_recommendations.clone(),
        action_steps: action_steps(&analysis.priority_skills),
    }
}

fn action_steps(priority_skills: &[String]) -> Vec<String> {
    let top_priorities = priority_skills
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<String>>()
        .join(", ");

    vec![
        format!("1. Focus on priority skills: {}", top_priorities),
        "2. Complete 1-2 courses per month from recommended resources".to_string(),
        "3. Practice skills through projects".to_string(),
        "4. Update your resume with new skills".to_string(),
        "5. Apply for positions that match your improved skill set".to_string(),
    ]
}
