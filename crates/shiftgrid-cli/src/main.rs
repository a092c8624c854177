use shiftgrid_core::impls::StaticSource;
use shiftgrid_core::layout::{LayoutConfig, layout};
use shiftgrid_core::ports::ScheduleSource;
use shiftgrid_core::schedule::{extract_roster, transform};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// デモ用の batch。CSV インポートのサンプルタスクと同じ内容を、
/// サービスが返す JSON の形で埋め込んでいます（roster なし）。
const SAMPLE_BATCH: &str = r#"
{
  "tasks": [
    {
      "task_id": "task-001",
      "task_type": "product_inquiry",
      "duration_minutes": 30,
      "priority": 3,
      "required_skills": "communication: 7, customer_service: 5",
      "start_datetime": "2024-01-15T09:00:00",
      "end_datetime": "2024-01-15T17:00:00"
    },
    {
      "task_id": "task-002",
      "task_type": "technical_support",
      "duration_minutes": 60,
      "priority": 4,
      "required_skills": "technical_knowledge: 8, problem_solving: 7",
      "start_datetime": "2024-01-15T10:30:00",
      "end_datetime": "2024-01-15T17:00:00"
    },
    {
      "task_id": "task-003",
      "task_type": "documentation",
      "duration_minutes": 120,
      "priority": 2,
      "required_skills": "documentation: 9, writing: 7",
      "start_datetime": "2024-01-16T13:00:00",
      "end_datetime": "2024-01-20T17:00:00"
    },
    {
      "task_id": "task-004",
      "task_type": "code_review",
      "duration_minutes": 90,
      "priority": 3,
      "required_skills": "code_review: 8, technical_knowledge: 9",
      "start_datetime": "2024-01-18T09:00:00",
      "end_datetime": "2024-01-18T17:00:00"
    },
    {
      "task_id": "task-005",
      "task_type": "ui_ux",
      "duration_minutes": 240,
      "priority": 2,
      "required_skills": "design: 8, figma: 7",
      "start_datetime": "2024-01-19T14:00:00",
      "end_datetime": "2024-01-19T18:00:00"
    }
  ]
}"#;

fn format_hour(hour: f64) -> String {
    let h = hour.floor() as u32;
    let m = ((hour - hour.floor()) * 60.0).round() as u32;
    format!("{h:02}:{m:02}")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // (A) 外部サービスの代わりに StaticSource から batch を取得
    let source = StaticSource::from_json(SAMPLE_BATCH).expect("sample batch decodes");
    let batch = source.fetch_batch().await.expect("fetch");

    // (B) 変換: records → blocks、roster が無いので placeholder 割り当て
    let blocks = transform(&batch.tasks, batch.employees.as_deref());
    let roster = extract_roster(&blocks);
    println!(
        "{} tasks -> {} blocks across {} employees\n",
        batch.tasks.len(),
        blocks.len(),
        roster.len()
    );

    // (C) 週間グリッドを描画（08:00-18:00 window、continuous 配置）
    let config = LayoutConfig::default();
    for employee in &roster {
        println!("{} ({})", employee.name, employee.id);
        for (day, label) in DAYS.iter().enumerate() {
            let placed = layout(&blocks, &employee.id, day as u8, &config);
            for p in placed {
                println!(
                    "  {label} {}-{}  {} [{}] ({})",
                    format_hour(p.block.start_hour),
                    format_hour(p.block.start_hour + p.block.duration_hours),
                    p.block.task_name,
                    p.block.category,
                    p.block.color_token,
                );
            }
        }
        println!();
    }
}
