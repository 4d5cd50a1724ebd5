//! Seed dataset: the mock data the dashboard ships with.
//!
//! One coherent session around 2026-02-18 -- a small task board, a content
//! pipeline in every stage, a week of calendar entries, the agent roster,
//! and a handful of memories.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use hq_core::agent::Agent;
use hq_core::content::ContentItem;
use hq_core::enums::{AgentStatus, Assignee, ContentStage, EventKind, TaskStatus};
use hq_core::event::CalendarEvent;
use hq_core::memory::Memory;
use hq_core::task::Task;

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("seed dates are valid")
}

fn stamp(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, d, 9, 0, 0)
        .single()
        .expect("seed timestamps are valid")
}

fn task(
    id: &str,
    title: &str,
    description: &str,
    status: TaskStatus,
    assignee: Assignee,
    due: NaiveDate,
) -> Task {
    Task {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        status,
        assignee,
        created_at: stamp(2026, 2, 16),
        updated_at: stamp(2026, 2, 16),
        due_date: Some(due),
    }
}

/// The six tasks on the seeded board: two per column, alternating owners.
pub fn tasks() -> Vec<Task> {
    vec![
        task(
            "1",
            "Review Q1 metrics",
            "Analyze performance data",
            TaskStatus::Todo,
            Assignee::Me,
            day(2026, 2, 20),
        ),
        task(
            "2",
            "Update documentation",
            "API docs need refresh",
            TaskStatus::Todo,
            Assignee::Agent,
            day(2026, 2, 21),
        ),
        task(
            "3",
            "Fix navigation bug",
            "Mobile menu broken",
            TaskStatus::InProgress,
            Assignee::Me,
            day(2026, 2, 19),
        ),
        task(
            "4",
            "Write blog post",
            "AI workflow tutorial",
            TaskStatus::InProgress,
            Assignee::Agent,
            day(2026, 2, 22),
        ),
        task(
            "5",
            "Deploy to production",
            "v2.0 release",
            TaskStatus::Done,
            Assignee::Me,
            day(2026, 2, 18),
        ),
        task(
            "6",
            "Update dependencies",
            "Security patches",
            TaskStatus::Done,
            Assignee::Agent,
            day(2026, 2, 17),
        ),
    ]
}

fn content_item(
    id: &str,
    title: &str,
    description: &str,
    stage: ContentStage,
    agent: &str,
    created: DateTime<Utc>,
) -> ContentItem {
    ContentItem {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        script: String::new(),
        thumbnail_url: None,
        stage,
        agent: agent.into(),
        created_at: created,
        updated_at: created,
    }
}

/// Five content items, one in each pipeline stage.
pub fn content() -> Vec<ContentItem> {
    let mut items = vec![
        content_item(
            "1",
            "AI Workflow Tutorial",
            "How I use AI agents daily",
            ContentStage::Ideas,
            "Scribe",
            stamp(2026, 2, 18),
        ),
        content_item(
            "2",
            "HQ Setup Guide",
            "Complete setup from scratch",
            ContentStage::Script,
            "Scribe",
            stamp(2026, 2, 17),
        ),
        content_item(
            "3",
            "Animation Deep Dive",
            "Elastic buttons and hover effects",
            ContentStage::Thumbnail,
            "Pixel",
            stamp(2026, 2, 16),
        ),
        content_item(
            "4",
            "Design Philosophy",
            "Japanese-inspired aesthetics",
            ContentStage::Filming,
            "Pixel",
            stamp(2026, 2, 15),
        ),
        content_item(
            "5",
            "My First AI App",
            "Building with agents",
            ContentStage::Published,
            "Yuki",
            stamp(2026, 2, 10),
        ),
    ];

    items[1].script = "In this video, I'll show you how to set up HQ...".into();
    items[2].script = "Let me show you the new animations...".into();
    items[2].thumbnail_url = Some("https://picsum.photos/seed/mission/400/300".into());
    items[3].script = "The HQ theme draws from...".into();
    items[3].thumbnail_url = Some("https://picsum.photos/seed/design/400/300".into());
    items[4].thumbnail_url = Some("https://picsum.photos/seed/first/400/300".into());

    items
}

fn event(
    id: &str,
    title: &str,
    date: NaiveDate,
    kind: EventKind,
    hour: u32,
    minute: u32,
) -> CalendarEvent {
    CalendarEvent {
        id: id.into(),
        title: title.into(),
        description: String::new(),
        date,
        time: NaiveTime::from_hms_opt(hour, minute, 0),
        kind,
        metadata: None,
        created_at: stamp(2026, 2, 10),
    }
}

/// A week of calendar entries, three of them on 2026-02-18.
pub fn events() -> Vec<CalendarEvent> {
    vec![
        event("1", "Team Sync", day(2026, 2, 18), EventKind::Event, 9, 0),
        event(
            "2",
            "Review Mission Control",
            day(2026, 2, 18),
            EventKind::Task,
            14,
            0,
        ),
        event(
            "3",
            "Cron: Daily Backup",
            day(2026, 2, 18),
            EventKind::Cron,
            23,
            0,
        ),
        event(
            "4",
            "Content Planning",
            day(2026, 2, 19),
            EventKind::Event,
            10,
            0,
        ),
        event(
            "5",
            "Deploy Updates",
            day(2026, 2, 20),
            EventKind::Task,
            16,
            0,
        ),
        event(
            "6",
            "Weekly Review",
            day(2026, 2, 21),
            EventKind::Event,
            15,
            0,
        ),
    ]
}

fn agent(
    id: &str,
    name: &str,
    role: &str,
    status: AgentStatus,
    current_task: Option<&str>,
    description: &str,
    color: &str,
) -> Agent {
    Agent {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        avatar: name.chars().next().map(|c| c.to_string()),
        status,
        current_task: current_task.map(String::from),
        description: description.into(),
        color: Some(color.into()),
        created_at: stamp(2026, 2, 1),
    }
}

/// The agent roster.
pub fn agents() -> Vec<Agent> {
    vec![
        agent(
            "1",
            "Yuki",
            "Chief Assistant",
            AgentStatus::Working,
            Some("Building Mission Control"),
            "Main assistant. Handles coordination, research, and general tasks.",
            "#E07A5F",
        ),
        agent(
            "2",
            "Code",
            "Developer",
            AgentStatus::Idle,
            None,
            "Specializes in software development, debugging, and code review.",
            "#81B29A",
        ),
        agent(
            "3",
            "Scribe",
            "Content Writer",
            AgentStatus::Idle,
            None,
            "Creates scripts, blog posts, and marketing copy.",
            "#F4A896",
        ),
        agent(
            "4",
            "Pixel",
            "Designer",
            AgentStatus::Idle,
            None,
            "Handles visual design, thumbnails, and UI/UX.",
            "#A8D5C3",
        ),
    ]
}

fn memory(
    id: &str,
    title: &str,
    text: &str,
    category: &str,
    created: DateTime<Utc>,
) -> Memory {
    Memory {
        id: id.into(),
        title: title.into(),
        content: text.into(),
        category: Some(category.into()),
        agent_id: Some("Yuki".into()),
        created_at: created,
    }
}

/// The memory log.
pub fn memories() -> Vec<Memory> {
    vec![
        memory(
            "1",
            "Mission Control Concept",
            "A central hub for tracking the team's activities: task board, \
             content pipeline, calendar, memory log, team roster, and office view.",
            "Ideas",
            stamp(2026, 2, 17),
        ),
        memory(
            "2",
            "Model Comparison Notes",
            "After testing both models: one excels at nuanced reasoning and \
             long-context tasks, the other is faster and great for coding.",
            "Research",
            stamp(2026, 2, 16),
        ),
        memory(
            "3",
            "Design System Decisions",
            "Went with a warm minimal palette instead of the typical dark \
             cyberpunk. Coral (#E07A5F) for primary actions, sage (#81B29A) \
             for success states, warm grays for surfaces.",
            "Design",
            stamp(2026, 2, 15),
        ),
        memory(
            "4",
            "Content Strategy Notes",
            "Content pillars: AI workflow tutorials, tips, and \
             behind-the-scenes builds. Post 2-3x per week. Focus on \
             practical, actionable content.",
            "Strategy",
            stamp(2026, 2, 14),
        ),
        memory(
            "5",
            "Team Structure",
            "Current team: Yuki (coordination), Code (development), Scribe \
             (scripts), Pixel (visuals). Each has distinct responsibilities \
             and can work in parallel.",
            "Team",
            stamp(2026, 2, 13),
        ),
    ]
}
