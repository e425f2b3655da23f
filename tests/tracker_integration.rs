//! End-to-end tests driving the tracker with command lines against a
//! real data file.

use anyhow::Result;
use taskden::tracker::Tracker;

fn setup() -> (tempfile::TempDir, std::path::PathBuf) {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("data").join("tasks.txt");
    (temp, path)
}

#[test]
fn test_todo_scenario() -> Result<()> {
    let (_temp, path) = setup();
    let mut tracker = Tracker::open(&path)?;

    let reply = tracker.execute("todo read book")?;
    assert!(reply.contains("[T][ ] read book"));
    assert!(reply.contains("Now you have 1 tasks in the list."));
    assert_eq!(tracker.tasks().len(), 1);
    Ok(())
}

#[test]
fn test_deadline_stored_format_and_reload_rendering() -> Result<()> {
    let (_temp, path) = setup();

    let mut tracker = Tracker::open(&path)?;
    tracker.execute("deadline submit /by 2026-03-01 1800")?;

    let stored = std::fs::read_to_string(&path)?;
    assert_eq!(stored, "D | 0 | submit | 2026-03-01 18:00 | \n");

    let reopened = Tracker::open(&path)?;
    assert_eq!(
        reopened.tasks().get(0)?.to_string(),
        "[D][ ] submit (by: Mar 01 2026 18:00)"
    );
    Ok(())
}

#[test]
fn test_inverted_event_rejected_and_nothing_added() -> Result<()> {
    let (_temp, path) = setup();
    let mut tracker = Tracker::open(&path)?;

    let result = tracker.execute("event meeting /from 2026-03-01 1400 /to 2026-03-01 1200");
    assert!(result.is_err());
    assert_eq!(tracker.tasks().len(), 0);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_tag_untag_and_find_over_descriptions_only() -> Result<()> {
    let (_temp, path) = setup();
    let mut tracker = Tracker::open(&path)?;

    tracker.execute("todo read book")?;
    let reply = tracker.execute("tag 1 #urgent")?;
    assert!(reply.contains("[T][ ] read book #urgent"));

    // Tags are not part of the search surface.
    assert_eq!(
        tracker.execute("find urgent")?,
        "No matching tasks found in your list."
    );

    tracker.execute("untag 1 #urgent")?;
    assert_eq!(tracker.tasks().get(0)?.tags().count(), 0);
    assert_eq!(
        tracker.execute("find urgent")?,
        "No matching tasks found in your list."
    );
    Ok(())
}

#[test]
fn test_mark_unmark_delete_across_sessions() -> Result<()> {
    let (_temp, path) = setup();

    {
        let mut tracker = Tracker::open(&path)?;
        tracker.execute("todo one")?;
        tracker.execute("todo two")?;
        tracker.execute("todo three")?;
        tracker.execute("mark 2")?;
    }

    {
        let mut tracker = Tracker::open(&path)?;
        assert!(tracker.tasks().get(1)?.is_done());

        tracker.execute("unmark 2")?;
        let reply = tracker.execute("delete 1")?;
        assert!(reply.contains("Noted. I've removed this task:"));
        assert!(reply.contains("Now you have 2 tasks in the list."));
    }

    let tracker = Tracker::open(&path)?;
    assert_eq!(tracker.tasks().len(), 2);
    assert_eq!(tracker.tasks().get(0)?.description(), "two");
    assert!(!tracker.tasks().get(0)?.is_done());
    Ok(())
}

#[test]
fn test_corrupt_records_are_skipped_on_startup() -> Result<()> {
    let (_temp, path) = setup();
    std::fs::create_dir_all(path.parent().unwrap())?;
    std::fs::write(
        &path,
        "T | 0 | keep me | \n\
         E | 0 | broken event | 2026-03-01 14:00\n\
         ?? nonsense ??\n\
         D | 1 | also keep me | 2026-04-01 09:30 | work\n",
    )?;

    let tracker = Tracker::open(&path)?;
    assert_eq!(tracker.tasks().len(), 2);
    assert_eq!(tracker.tasks().get(0)?.description(), "keep me");
    assert_eq!(tracker.tasks().get(1)?.description(), "also keep me");
    assert!(tracker.tasks().get(1)?.has_tag("work"));
    Ok(())
}

#[test]
fn test_respond_reports_errors_as_text() -> Result<()> {
    let (_temp, path) = setup();
    let mut tracker = Tracker::open(&path)?;

    assert!(tracker.respond("deadline x /by feb 30").contains("Invalid date"));
    assert!(tracker.respond("blargh").contains("Unknown command"));
    assert!(tracker.respond("mark 1").contains("does not exist"));

    // Valid input still works through the same entry point.
    let reply = tracker.respond("todo read book");
    assert!(reply.contains("[T][ ] read book"));
    Ok(())
}

#[test]
fn test_mixed_variants_roundtrip_through_commands() -> Result<()> {
    let (_temp, path) = setup();

    {
        let mut tracker = Tracker::open(&path)?;
        tracker.execute("todo read book")?;
        tracker.execute("deadline submit report /by 2026-03-01 1800")?;
        tracker.execute("event team meeting /from 2026-03-02 0900 /to 2026-03-02 1000")?;
        tracker.execute("tag 1 #Fun")?;
        tracker.execute("tag 3 #work")?;
        tracker.execute("mark 3")?;
    }

    let tracker = Tracker::open(&path)?;
    assert_eq!(tracker.tasks().len(), 3);
    assert!(tracker.tasks().get(0)?.has_tag("fun"));
    assert_eq!(
        tracker.tasks().get(2)?.to_string(),
        "[E][X] team meeting (from: Mar 02 2026 09:00 to: Mar 02 2026 10:00) #work"
    );
    Ok(())
}
