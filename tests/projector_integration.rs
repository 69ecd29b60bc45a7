use coco_downloader::downloader::models::{DownloadTask, MusicItem, TaskStatus};
use coco_downloader::downloader::projector::{
    TaskIntent, clear_terminal, count_active, has_clearable, project, remove,
};

fn task(id: &str, status: TaskStatus, start_time: i64) -> DownloadTask {
    DownloadTask {
        id: id.to_string(),
        music_item: MusicItem::new(id, format!("曲目 {}", id)),
        status,
        progress: 0.0,
        file_name: format!("{}.mp3", id),
        start_time,
    }
}

fn ids(tasks: &[DownloadTask]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

/// a 已完成, b 下载中, c 等待中
fn scenario() -> Vec<DownloadTask> {
    vec![
        task("a", TaskStatus::Completed, 100),
        task("b", TaskStatus::Downloading, 200),
        task("c", TaskStatus::Pending, 50),
    ]
}

fn mixed() -> Vec<DownloadTask> {
    vec![
        task("p1", TaskStatus::Pending, 10),
        task("d1", TaskStatus::Downloading, 5),
        task("e1", TaskStatus::Error("磁盘已满".to_string()), 40),
        task("c1", TaskStatus::Completed, 30),
        task("d2", TaskStatus::Downloading, 50),
        task("p2", TaskStatus::Pending, 60),
        task("c2", TaskStatus::Completed, 20),
    ]
}

#[test]
fn test_project_scenario() {
    let tasks = scenario();
    assert_eq!(ids(&project(&tasks)), vec!["b", "a", "c"]);
    assert_eq!(count_active(&tasks), 1);
    assert!(has_clearable(&tasks));
}

#[test]
fn test_remove_scenario() {
    let tasks = scenario();
    assert_eq!(ids(&remove(&tasks, "b")), vec!["a", "c"]);
}

#[test]
fn test_clear_terminal_scenario() {
    let tasks = scenario();
    assert_eq!(ids(&clear_terminal(&tasks)), vec!["b", "c"]);
}

#[test]
fn test_project_keeps_every_task() {
    let tasks = mixed();
    let ordered = project(&tasks);
    assert_eq!(ordered.len(), tasks.len());
    for t in &tasks {
        assert_eq!(ordered.iter().filter(|o| o.id == t.id).count(), 1);
    }
}

#[test]
fn test_project_downloading_first_then_recent() {
    let ordered = project(&mixed());
    assert_eq!(
        ids(&ordered),
        vec!["d2", "d1", "p2", "e1", "c1", "c2", "p1"]
    );

    let first_idle = ordered
        .iter()
        .position(|t| !t.status.is_downloading())
        .unwrap();
    assert!(ordered[first_idle..].iter().all(|t| !t.status.is_downloading()));
    assert!(
        ordered[first_idle..]
            .windows(2)
            .all(|w| w[0].start_time >= w[1].start_time)
    );
}

#[test]
fn test_project_is_idempotent() {
    let once = project(&mixed());
    let twice = project(&once);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_project_ties_keep_input_order() {
    let tasks = vec![
        task("x", TaskStatus::Completed, 100),
        task("y", TaskStatus::Pending, 100),
        task("z", TaskStatus::Error("超时".to_string()), 100),
    ];
    assert_eq!(ids(&project(&tasks)), vec!["x", "y", "z"]);

    let reversed: Vec<_> = tasks.into_iter().rev().collect();
    assert_eq!(ids(&project(&reversed)), vec!["z", "y", "x"]);
}

#[test]
fn test_project_empty() {
    assert!(project(&[]).is_empty());
    assert_eq!(count_active(&[]), 0);
    assert!(!has_clearable(&[]));
}

#[test]
fn test_remove_absent_id_is_noop() {
    let tasks = mixed();
    assert_eq!(remove(&tasks, "missing"), tasks);
}

#[test]
fn test_remove_present_id() {
    let tasks = mixed();
    let rest = remove(&tasks, "e1");
    assert_eq!(rest.len(), tasks.len() - 1);
    assert!(rest.iter().all(|t| t.id != "e1"));
    assert_eq!(ids(&rest), vec!["p1", "d1", "c1", "d2", "p2", "c2"]);
}

#[test]
fn test_remove_drops_only_one_match() {
    // 上游保证 id 唯一，这里只验证最多删除一个
    let tasks = vec![
        task("dup", TaskStatus::Pending, 1),
        task("dup", TaskStatus::Completed, 2),
    ];
    let rest = remove(&tasks, "dup");
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].status, TaskStatus::Completed);
}

#[test]
fn test_clear_terminal_without_terminal_tasks() {
    let tasks = vec![
        task("p", TaskStatus::Pending, 3),
        task("d", TaskStatus::Downloading, 1),
    ];
    assert_eq!(clear_terminal(&tasks), tasks);
    assert!(!has_clearable(&tasks));
}

#[test]
fn test_clear_terminal_mixed() {
    let rest = clear_terminal(&mixed());
    assert_eq!(ids(&rest), vec!["p1", "d1", "d2", "p2"]);
    assert!(rest.iter().all(|t| !t.status.is_terminal()));
}

#[test]
fn test_count_active_bounds() {
    let tasks = mixed();
    let active = count_active(&tasks);
    assert_eq!(active, 2);
    assert!(active <= tasks.len());

    let idle = clear_terminal(&remove(&remove(&tasks, "d1"), "d2"));
    assert_eq!(count_active(&idle), 0);
    assert!(project(&idle).iter().all(|t| !t.status.is_downloading()));
}

#[test]
fn test_intent_apply() {
    let tasks = scenario();
    assert_eq!(
        ids(&TaskIntent::RemoveTask("a".to_string()).apply(&tasks)),
        vec!["b", "c"]
    );
    assert_eq!(ids(&TaskIntent::ClearCompleted.apply(&tasks)), vec!["b", "c"]);
    assert_eq!(
        TaskIntent::RemoveTask("nope".to_string()).apply(&tasks),
        tasks
    );
}
