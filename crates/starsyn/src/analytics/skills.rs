use std::f64::consts::TAU;

use serde::Serialize;

/// Center of the radial skill chart in its 100x100 view box.
pub const RADIAL_CENTER: (f64, f64) = (50.0, 50.0);
/// Spoke length of a perfect score.
pub const RADIAL_MAX_LENGTH: f64 = 45.0;
/// Skills listed in the quick view.
pub const TOP_SKILL_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    pub id: &'static str,
    pub name: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub skills: &'static [SkillScore],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Proficient,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Expert,
            80..=89 => Self::Advanced,
            70..=79 => Self::Proficient,
            60..=69 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Proficient => "Proficient",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// End of one spoke. `angle` is in radians, clockwise in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialPoint {
    pub skill_id: &'static str,
    pub angle: f64,
    pub length: f64,
    pub x: f64,
    pub y: f64,
}

/// Spreads the skills evenly around the chart center, one spoke per skill, with
/// the spoke length proportional to the score. Scores above 100 are capped.
pub fn radial_points(skills: &[SkillScore]) -> Vec<RadialPoint> {
    if skills.is_empty() {
        return Vec::new();
    }

    let step = TAU / skills.len() as f64;
    let (cx, cy) = RADIAL_CENTER;
    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let angle = index as f64 * step;
            let length = f64::from(skill.score.min(100)) / 100.0 * RADIAL_MAX_LENGTH;
            RadialPoint {
                skill_id: skill.id,
                angle,
                length,
                x: cx + length * angle.cos(),
                y: cy + length * angle.sin(),
            }
        })
        .collect()
}

/// A skill together with the category it was assessed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedSkill {
    #[serde(flatten)]
    pub skill: SkillScore,
    pub category_id: &'static str,
    pub category_name: &'static str,
    pub category_color: &'static str,
    pub level: ProficiencyLevel,
}

/// Spokes of one category, drawn as a filled polygon from the center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpokes {
    pub category_id: &'static str,
    pub color: &'static str,
    pub points: Vec<RadialPoint>,
    pub outline: String,
}

/// Skill assessment attached to a candidate profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAssessment {
    pub candidate_id: String,
    pub categories: &'static [SkillCategory],
}

impl SkillAssessment {
    pub fn new(candidate_id: impl Into<String>, categories: &'static [SkillCategory]) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            categories,
        }
    }

    /// Every candidate shows the sample assessment until a scoring backend exists.
    pub fn sample(candidate_id: impl Into<String>) -> Self {
        Self::new(candidate_id, SAMPLE_SKILL_CATEGORIES)
    }

    /// All skills in category order.
    pub fn all_skills(&self) -> Vec<RankedSkill> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.skills.iter().map(move |skill| RankedSkill {
                    skill: *skill,
                    category_id: category.id,
                    category_name: category.name,
                    category_color: category.color,
                    level: ProficiencyLevel::from_score(skill.score),
                })
            })
            .collect()
    }

    /// Highest scores first; equal scores keep category order.
    pub fn top_skills(&self, limit: usize) -> Vec<RankedSkill> {
        let mut ranked = self.all_skills();
        ranked.sort_by(|a, b| b.skill.score.cmp(&a.skill.score));
        ranked.truncate(limit);
        ranked
    }

    /// Radial chart over all skills, split back into per-category groups. Angles
    /// are shared across categories so the groups tile the circle.
    pub fn spokes(&self) -> Vec<CategorySpokes> {
        let skills: Vec<SkillScore> = self
            .categories
            .iter()
            .flat_map(|category| category.skills.iter().copied())
            .collect();
        let mut remaining = radial_points(&skills).into_iter();

        self.categories
            .iter()
            .map(|category| {
                let points: Vec<RadialPoint> =
                    remaining.by_ref().take(category.skills.len()).collect();
                CategorySpokes {
                    category_id: category.id,
                    color: category.color,
                    outline: outline(&points),
                    points,
                }
            })
            .collect()
    }
}

fn outline(points: &[RadialPoint]) -> String {
    let (cx, cy) = RADIAL_CENTER;
    let mut path = format!("M{cx},{cy}");
    for point in points {
        path.push_str(&format!(" L{:.2},{:.2}", point.x, point.y));
    }
    path.push_str(" Z");
    path
}

const fn skill(id: &'static str, name: &'static str, score: u8) -> SkillScore {
    SkillScore { id, name, score }
}

pub static SAMPLE_SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "technical",
        name: "Technical Proficiency",
        color: "#3B82F6",
        description: "Hard skills, tools, technologies",
        score: 92,
        skills: &[
            skill("t1", "Programming Languages", 95),
            skill("t2", "Database Systems", 90),
            skill("t3", "System Design", 94),
        ],
    },
    SkillCategory {
        id: "creative",
        name: "Creative Expression",
        color: "#10B981",
        description: "Design thinking, innovation, artistic elements",
        score: 75,
        skills: &[
            skill("c1", "Design Thinking", 82),
            skill("c2", "Visual Design", 68),
            skill("c3", "Innovative Ideation", 84),
        ],
    },
    SkillCategory {
        id: "analytical",
        name: "Analytical Reasoning",
        color: "#F59E0B",
        description: "Data, research, critical thinking",
        score: 88,
        skills: &[
            skill("a1", "Data Analysis", 90),
            skill("a2", "Critical Thinking", 92),
            skill("a3", "Research Methods", 85),
        ],
    },
    SkillCategory {
        id: "social",
        name: "Social Dynamics",
        color: "#EC4899",
        description: "Teamwork, leadership, communication",
        score: 72,
        skills: &[
            skill("s1", "Written Communication", 88),
            skill("s2", "Verbal Communication", 75),
            skill("s3", "Team Collaboration", 70),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn spokes_are_evenly_spaced_around_the_center() {
        let skills = [
            skill("n", "North", 100),
            skill("e", "East", 100),
            skill("s", "South", 100),
            skill("w", "West", 100),
        ];
        let points = radial_points(&skills);

        let angles: Vec<f64> = points.iter().map(|point| point.angle).collect();
        for (angle, expected) in angles.iter().zip([0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]) {
            assert!(close(*angle, expected), "{angle} != {expected}");
        }
        assert!(close(points[0].x, 95.0) && close(points[0].y, 50.0));
        assert!(close(points[1].x, 50.0) && close(points[1].y, 95.0));
        assert!(close(points[2].x, 5.0) && close(points[2].y, 50.0));
    }

    #[test]
    fn spoke_length_scales_with_score() {
        let points = radial_points(&[
            skill("a", "Half", 50),
            skill("b", "None", 0),
            skill("c", "Over", 250),
        ]);
        assert!(close(points[0].length, 22.5));
        assert!(close(points[0].x, 72.5));
        assert!(close(points[1].length, 0.0));
        assert!(close(points[1].x, 50.0) && close(points[1].y, 50.0));
        assert!(close(points[2].length, RADIAL_MAX_LENGTH));

        assert!(radial_points(&[]).is_empty());
    }

    #[test]
    fn top_skills_rank_by_score_and_keep_category_order_on_ties() {
        let assessment = SkillAssessment::sample("cand-1001");
        let top: Vec<&str> = assessment
            .top_skills(TOP_SKILL_COUNT)
            .iter()
            .map(|ranked| ranked.skill.id)
            .collect();
        assert_eq!(top, vec!["t1", "t3", "a2", "t2", "a1"]);

        let best = assessment.top_skills(1);
        assert_eq!(best[0].category_name, "Technical Proficiency");
        assert_eq!(best[0].level, ProficiencyLevel::Expert);
        assert_eq!(assessment.top_skills(100).len(), 12);
    }

    #[test]
    fn category_groups_share_one_circle() {
        let spokes = SkillAssessment::sample("cand-1001").spokes();
        assert_eq!(spokes.len(), 4);
        assert!(spokes.iter().all(|group| group.points.len() == 3));

        // Twelve skills: the creative group starts a quarter turn in.
        assert!(close(spokes[1].points[0].angle, FRAC_PI_2));
        assert_eq!(spokes[1].points[0].skill_id, "c1");
        assert!(spokes[0].outline.starts_with("M50,50 L92.75,50.00"));
        assert!(spokes[0].outline.ends_with(" Z"));
    }

    #[test]
    fn proficiency_levels_follow_score_bands() {
        let levels: Vec<&str> = [95, 90, 89, 70, 60, 59]
            .into_iter()
            .map(|score| ProficiencyLevel::from_score(score).label())
            .collect();
        assert_eq!(
            levels,
            vec!["Expert", "Expert", "Advanced", "Proficient", "Intermediate", "Beginner"]
        );
    }
}
