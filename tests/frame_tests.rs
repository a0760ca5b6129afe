use insta::assert_snapshot;
use proptest::prelude::*;
use tasktool::model::frame::AGGREGATE_CPU_CAP;
use tasktool::model::{FilterQuery, FrameView, ProcessSample, SortMode};

fn sample(pid: u32, name: &str, mem: u64, cpu: f64, disk: f64) -> ProcessSample {
    ProcessSample {
        pid,
        name: name.to_string(),
        thread_count: 1,
        working_set_mb: mem,
        cpu_percent: cpu,
        disk_mbps: disk,
    }
}

fn fixture() -> Vec<ProcessSample> {
    vec![
        sample(40, "chrome.exe", 900, 60.0, 0.5),
        sample(7, "Chrome Helper", 300, 50.0, 2.0),
        sample(1200, "notepad.exe", 20, 1.0, 0.0),
        sample(3, "svchost.exe", 80, 27.0, 10.0),
    ]
}

fn describe(view: &FrameView) -> String {
    let mut lines: Vec<String> = view
        .rows
        .iter()
        .map(|r| {
            format!(
                "{:>5} {:<14} {:>6.1} {:>5} {:>6.1}",
                r.pid, r.name, r.cpu_percent, r.working_set_mb, r.disk_mbps
            )
        })
        .collect();
    lines.push(format!(
        "visible {}/{} cpu {:.1} disk {:.1}",
        view.visible_count, view.total_count, view.aggregate_cpu, view.aggregate_disk
    ));
    lines.join("\n")
}

#[test]
fn chrome_filter_by_cpu() {
    let view = FrameView::build(&fixture(), &FilterQuery::new("%chrome%"), SortMode::ByCpu);
    assert_snapshot!("frame_chrome_by_cpu", describe(&view));
}

#[test]
fn everything_by_disk() {
    let view = FrameView::build(&fixture(), &FilterQuery::default(), SortMode::ByDisk);
    assert_snapshot!("frame_all_by_disk", describe(&view));
}

#[test]
fn plain_substring_filter_by_pid() {
    let view = FrameView::build(&fixture(), &FilterQuery::new("EXE"), SortMode::ByPid);
    let pids: Vec<u32> = view.rows.iter().map(|r| r.pid).collect();
    assert_eq!(pids, vec![3, 40, 1200]);
    assert_eq!(view.total_count, 4);
}

fn arb_sample() -> impl Strategy<Value = ProcessSample> {
    (
        0u32..100_000,
        "[a-zA-Z .]{0,16}",
        0u64..64_000,
        0.0f64..150.0,
        0.0f64..500.0,
    )
        .prop_map(|(pid, name, mem, cpu, disk)| sample(pid, &name, mem, cpu, disk))
}

fn arb_sort() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::ByRam),
        Just(SortMode::ByCpu),
        Just(SortMode::ByDisk),
        Just(SortMode::ByPid),
    ]
}

fn in_order(a: &ProcessSample, b: &ProcessSample, sort: SortMode) -> bool {
    match sort {
        SortMode::ByRam => a.working_set_mb >= b.working_set_mb,
        SortMode::ByCpu => a.cpu_percent >= b.cpu_percent,
        SortMode::ByDisk => a.disk_mbps >= b.disk_mbps,
        SortMode::ByPid => a.pid <= b.pid,
    }
}

proptest! {
    #[test]
    fn rows_are_ordered_by_sort_key(
        samples in prop::collection::vec(arb_sample(), 0..60),
        sort in arb_sort(),
    ) {
        let view = FrameView::build(&samples, &FilterQuery::default(), sort);
        for pair in view.rows.windows(2) {
            prop_assert!(in_order(&pair[0], &pair[1], sort));
        }
    }

    #[test]
    fn wildcard_keeps_every_row(
        samples in prop::collection::vec(arb_sample(), 0..60),
        sort in arb_sort(),
    ) {
        let view = FrameView::build(&samples, &FilterQuery::default(), sort);
        prop_assert_eq!(view.visible_count, samples.len());
        prop_assert_eq!(view.total_count, samples.len());

        let mut expected: Vec<u32> = samples.iter().map(|s| s.pid).collect();
        let mut actual: Vec<u32> = view.rows.iter().map(|s| s.pid).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn aggregate_cpu_never_exceeds_cap(
        samples in prop::collection::vec(arb_sample(), 0..60),
        query in "[a-z%]{0,4}",
    ) {
        let view = FrameView::build(&samples, &FilterQuery::new(query), SortMode::ByCpu);
        prop_assert!(view.aggregate_cpu <= AGGREGATE_CPU_CAP);
        prop_assert!(view.aggregate_cpu >= 0.0);
        prop_assert!(view.visible_count <= view.total_count);
        prop_assert_eq!(view.rows.len(), view.visible_count);
    }

    #[test]
    fn filter_ignores_case(name in "[a-zA-Z]{1,12}", needle in "[a-zA-Z]{1,4}") {
        let lower = FilterQuery::new(needle.to_lowercase());
        let upper = FilterQuery::new(needle.to_uppercase());
        prop_assert_eq!(lower.matches(&name), upper.matches(&name));
        prop_assert_eq!(lower.matches(&name), lower.matches(&name.to_uppercase()));
    }

    #[test]
    fn wrapped_query_matches_like_bare_query(name in "[a-zA-Z.]{0,12}", needle in "[a-z]{1,4}") {
        let bare = FilterQuery::new(needle.clone());
        let wrapped = FilterQuery::new(format!("%{needle}%"));
        prop_assert_eq!(bare.matches(&name), wrapped.matches(&name));
    }
}
