//! Startup data for the mock store.

use chrono::NaiveDate;
use contracts::domain::a001_learning_module::{Assignment, AssignmentStatus, LearningModule, Lesson};
use contracts::domain::a002_leaderboard::LeaderboardEntry;
use contracts::system::users::{Role, User, UserStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    progress: u8,
    join_date: NaiveDate,
    company: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        progress,
        join_date,
        company: company.map(str::to_string),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "Rajesh Kumar",
            "rajesh@innovatetech.in",
            Role::Learner,
            UserStatus::Active,
            65,
            date(2024, 1, 15),
            Some("InnovateTech"),
        ),
        user(
            "2",
            "Anita Desai",
            "anita@textileworld.in",
            Role::Learner,
            UserStatus::Active,
            45,
            date(2024, 1, 10),
            Some("Textile World"),
        ),
        user(
            "3",
            "Vikram Singh",
            "vikram@manufacturingpro.in",
            Role::Learner,
            UserStatus::Active,
            30,
            date(2024, 1, 20),
            Some("Manufacturing Pro"),
        ),
        user(
            "4",
            "Meera Patel",
            "meera@foodprocessing.in",
            Role::Learner,
            UserStatus::Inactive,
            80,
            date(2024, 1, 5),
            Some("Food Processing"),
        ),
        user(
            "5",
            "Priya Sharma",
            "priya@leadershipguru.in",
            Role::Coach,
            UserStatus::Active,
            0,
            date(2023, 12, 1),
            Some("Leadership Guru"),
        ),
        user(
            "6",
            "Admin User",
            "admin@platform.in",
            Role::Admin,
            UserStatus::Active,
            0,
            date(2023, 11, 1),
            None,
        ),
    ]
}

fn module(id: &str, title: &str, icon: &str, description: &str, total: u32) -> LearningModule {
    LearningModule {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        lessons: Vec::new(),
        total_lessons: total,
        completed_lessons: 0,
    }
}

#[allow(clippy::too_many_arguments)]
fn lesson(
    id: &str,
    module_id: &str,
    title: &str,
    date: &str,
    progress: u8,
    assignment: Assignment,
    materials: &[&str],
    duration: u32,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        module_id: module_id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        progress,
        assignment,
        video_url: None,
        materials: materials.iter().map(|m| m.to_string()).collect(),
        quiz: None,
        duration,
    }
}

fn reviewed(score: u32, feedback: Option<&str>) -> Assignment {
    Assignment {
        status: AssignmentStatus::Reviewed,
        submission: None,
        feedback: feedback.map(str::to_string),
        score: Some(score),
    }
}

pub fn modules() -> Vec<LearningModule> {
    let mut mind = module(
        "1",
        "Mind Management Mastery",
        "Brain",
        "Master your mindset and cognitive abilities for better decision-making",
        8,
    );
    mind.completed_lessons = 3;
    mind.lessons = vec![
        lesson(
            "1",
            "1",
            "Introduction to Mind Management",
            "2024-01-15",
            100,
            reviewed(95, Some("Excellent understanding of core concepts!")),
            &["Mind Management Guide.pdf", "Reflection Journal.pdf"],
            45,
        ),
        lesson(
            "2",
            "1",
            "Cognitive Biases and Decision Making",
            "2024-01-17",
            75,
            Assignment {
                status: AssignmentStatus::Submitted,
                ..Assignment::not_started()
            },
            &["Cognitive Biases Handbook.pdf"],
            60,
        ),
    ];

    let mut emotional = module(
        "2",
        "Emotional Intelligence",
        "Heart",
        "Develop emotional awareness and interpersonal skills",
        6,
    );
    emotional.completed_lessons = 1;
    emotional.lessons = vec![lesson(
        "3",
        "2",
        "Understanding Emotional Intelligence",
        "2024-01-20",
        100,
        reviewed(88, None),
        &["EQ Assessment.pdf"],
        50,
    )];

    vec![
        mind,
        emotional,
        module(
            "3",
            "Decision-Making Mastery",
            "Target",
            "Learn frameworks for effective strategic decision-making",
            7,
        ),
        module(
            "4",
            "Productivity Mastery",
            "Zap",
            "Optimize your time and energy for maximum output",
            5,
        ),
        module(
            "5",
            "Communication Mastery",
            "MessageCircle",
            "Master verbal and non-verbal communication skills",
            8,
        ),
        module(
            "6",
            "Giving Effective Feedback",
            "MessageSquare",
            "Learn to give constructive and impactful feedback",
            4,
        ),
        module(
            "7",
            "Motivation & Ownership",
            "Trophy",
            "Build intrinsic motivation and accountability",
            6,
        ),
        module(
            "8",
            "Conflict Management",
            "Shield",
            "Navigate and resolve conflicts effectively",
            5,
        ),
        module(
            "9",
            "Trust & Openness",
            "Users",
            "Build trust and foster open communication",
            4,
        ),
        module(
            "10",
            "Delegation Mastery",
            "UserCheck",
            "Master the art of effective delegation",
            5,
        ),
        module(
            "11",
            "Problem Solving & Critical Thinking",
            "Lightbulb",
            "Develop analytical and creative problem-solving skills",
            7,
        ),
    ]
}

fn entry(
    id: &str,
    name: &str,
    photo: u32,
    rank: u32,
    points: (u32, u32, u32),
    badges: &[&str],
) -> LeaderboardEntry {
    let (total_points, weekly_points, monthly_points) = points;
    LeaderboardEntry {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1"
        ),
        rank,
        total_points,
        weekly_points,
        monthly_points,
        badges: badges.iter().map(|b| b.to_string()).collect(),
    }
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry(
            "1",
            "Rajesh Kumar",
            1681010,
            1,
            (2450, 320, 1200),
            &["Focus Champion", "Decision Master"],
        ),
        entry("2", "Anita Desai", 1239291, 2, (2380, 280, 1150), &["Communication Pro"]),
        entry("3", "Vikram Singh", 2379004, 3, (2200, 250, 980), &["Problem Solver"]),
        entry("4", "Meera Patel", 1130626, 4, (2100, 220, 900), &["Team Builder"]),
    ]
}
