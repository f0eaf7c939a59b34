use vagenda_core::{
    Document, EditError, ItemStatus, Narrative, Phase, PhaseStatus, Plan, PlanStatus, TodoItem,
    TodoList,
};

fn todo_doc(titles: &[&str]) -> Document {
    Document::with_todo_list(TodoList::from_items(
        titles.iter().map(|title| TodoItem::new(*title)).collect(),
    ))
}

fn plan_doc(titles: &[&str]) -> Document {
    Document::with_plan(
        Plan::new("release").with_phases(titles.iter().map(|title| Phase::new(*title)).collect()),
    )
}

fn todo_titles(doc: &Document) -> Vec<&str> {
    doc.todo_items().iter().map(|item| item.title.as_str()).collect()
}

fn phase_titles(doc: &Document) -> Vec<&str> {
    doc.phases().iter().map(|phase| phase.title.as_str()).collect()
}

#[test]
fn todo_mutations_without_todo_list_fail_with_no_todo_list() {
    let mut doc = Document::with_plan(Plan::new("only plan"));

    assert_eq!(doc.add_todo_item(TodoItem::new("x")), Err(EditError::NoTodoList));
    assert_eq!(
        doc.update_todo_item(0, TodoItem::new("x")),
        Err(EditError::NoTodoList)
    );
    assert_eq!(
        doc.update_todo_item_status(0, ItemStatus::Completed),
        Err(EditError::NoTodoList)
    );
    assert_eq!(doc.remove_todo_item(0).unwrap_err(), EditError::NoTodoList);
    assert!(doc.todo_items().is_empty());
    assert!(doc.todo_list.is_none());
}

#[test]
fn plan_mutations_without_plan_fail() {
    let mut doc = todo_doc(&["a"]);

    assert_eq!(doc.add_phase(Phase::new("p")), Err(EditError::NoPlan));
    assert_eq!(
        doc.add_narrative("intro", Narrative::new("Intro", "text")),
        Err(EditError::NoPlan)
    );
    assert_eq!(doc.remove_narrative("intro"), Err(EditError::NoPlan));
    assert_eq!(
        doc.update_plan_status(PlanStatus::Approved),
        Err(EditError::NoPlan)
    );

    let no_plan_index = EditError::InvalidIndex { index: 0, len: 0 };
    assert_eq!(doc.update_phase(0, Phase::new("p")), Err(no_plan_index));
    assert_eq!(
        doc.update_phase_status(0, PhaseStatus::Completed),
        Err(no_plan_index)
    );
    assert_eq!(doc.remove_phase(0).unwrap_err(), no_plan_index);

    assert!(doc.phases().is_empty());
    assert!(doc.narratives().is_empty());
    assert!(doc.plan.is_none());
}

#[test]
fn add_todo_item_appends_in_order() {
    let mut doc = todo_doc(&["a", "b"]);

    doc.add_todo_item(TodoItem::new("c")).unwrap();

    assert_eq!(todo_titles(&doc), ["a", "b", "c"]);
}

#[test]
fn update_todo_item_replaces_only_target() {
    let mut doc = todo_doc(&["a", "b", "c"]);
    let replacement = TodoItem::new("B").with_status(ItemStatus::Blocked);

    doc.update_todo_item(1, replacement.clone()).unwrap();

    assert_eq!(todo_titles(&doc), ["a", "B", "c"]);
    assert_eq!(doc.todo_items()[1], replacement);
}

#[test]
fn update_todo_item_out_of_range_leaves_list_unchanged() {
    let mut doc = todo_doc(&["a", "b"]);
    let before = doc.clone();

    let err = doc.update_todo_item(2, TodoItem::new("z")).unwrap_err();

    assert_eq!(err, EditError::InvalidIndex { index: 2, len: 2 });
    assert_eq!(doc, before);
}

#[test]
fn update_todo_item_status_keeps_other_fields() {
    let mut item = TodoItem::new("item0");
    item.description = Some("details".to_string());
    item.id = Some("1.1".to_string());
    item.plan_ref = Some("#phase-1".to_string());
    item.ensure_uid();
    let mut doc = Document::with_todo_list(TodoList::from_items(vec![item.clone()]));

    doc.update_todo_item_status(0, ItemStatus::Completed).unwrap();

    let expected = TodoItem {
        status: ItemStatus::Completed,
        ..item
    };
    assert_eq!(doc.todo_items(), [expected]);
}

#[test]
fn remove_todo_item_shifts_later_items_left() {
    let mut doc = todo_doc(&["a", "b", "c", "d"]);

    let removed = doc.remove_todo_item(1).unwrap();

    assert_eq!(removed.title, "b");
    assert_eq!(todo_titles(&doc), ["a", "c", "d"]);
}

#[test]
fn remove_todo_item_out_of_range_keeps_length() {
    let mut doc = todo_doc(&["a", "b"]);

    assert_eq!(
        doc.remove_todo_item(5).unwrap_err(),
        EditError::InvalidIndex { index: 5, len: 2 }
    );
    assert_eq!(doc.todo_items().len(), 2);
}

#[test]
fn empty_todo_list_rejects_every_index() {
    let mut doc = todo_doc(&[]);

    assert_eq!(
        doc.update_todo_item_status(0, ItemStatus::Pending),
        Err(EditError::InvalidIndex { index: 0, len: 0 })
    );
    doc.add_todo_item(TodoItem::new("first")).unwrap();
    assert_eq!(todo_titles(&doc), ["first"]);
}

#[test]
fn phase_add_update_and_status() {
    let mut doc = plan_doc(&["p0"]);

    doc.add_phase(Phase::new("p1")).unwrap();
    doc.update_phase(0, Phase::new("P0").with_id("1")).unwrap();
    doc.update_phase_status(1, PhaseStatus::InProgress).unwrap();

    assert_eq!(phase_titles(&doc), ["P0", "p1"]);
    assert_eq!(doc.phases()[0].id.as_deref(), Some("1"));
    assert_eq!(doc.phases()[0].status, PhaseStatus::Pending);
    assert_eq!(doc.phases()[1].status, PhaseStatus::InProgress);
    assert_eq!(doc.phases()[1].title, "p1");
}

#[test]
fn phase_index_out_of_range_reports_length() {
    let mut doc = plan_doc(&["p0", "p1"]);
    let before = doc.clone();

    assert_eq!(
        doc.update_phase(2, Phase::new("x")),
        Err(EditError::InvalidIndex { index: 2, len: 2 })
    );
    assert_eq!(
        doc.update_phase_status(9, PhaseStatus::Blocked),
        Err(EditError::InvalidIndex { index: 9, len: 2 })
    );
    assert_eq!(doc, before);
}

#[test]
fn remove_middle_phase() {
    let mut doc = plan_doc(&["p0", "p1", "p2"]);

    let removed = doc.remove_phase(1).unwrap();

    assert_eq!(removed.title, "p1");
    assert_eq!(phase_titles(&doc), ["p0", "p2"]);
}

#[test]
fn first_narrative_on_plan_without_narratives() {
    let mut doc = plan_doc(&[]);
    let narrative = Narrative::new("Introduction", "Why this plan exists.");

    let previous = doc.add_narrative("intro", narrative.clone()).unwrap();

    assert_eq!(previous, None);
    assert_eq!(doc.narratives().len(), 1);
    assert_eq!(doc.narratives().get("intro"), Some(&narrative));
}

#[test]
fn narrative_overwrite_and_remove_lifecycle() {
    let mut doc = plan_doc(&[]);
    let v1 = Narrative::new("Intro", "v1");
    let v2 = Narrative::new("Intro", "v2");

    doc.add_narrative("intro", v1.clone()).unwrap();
    let replaced = doc.add_narrative("intro", v2.clone()).unwrap();

    assert_eq!(replaced, Some(v1));
    assert_eq!(doc.narratives().len(), 1);
    assert_eq!(doc.narratives()["intro"], v2);

    assert_eq!(doc.remove_narrative("intro").unwrap(), Some(v2));
    assert!(!doc.narratives().contains_key("intro"));
    assert_eq!(doc.remove_narrative("intro").unwrap(), None);
    assert!(doc.narratives().is_empty());
}

#[test]
fn plan_status_transitions_are_unconstrained() {
    let mut doc = plan_doc(&[]);

    doc.update_plan_status(PlanStatus::Completed).unwrap();
    doc.update_plan_status(PlanStatus::Draft).unwrap();
    doc.update_plan_status(PlanStatus::Cancelled).unwrap();

    assert_eq!(doc.plan.as_ref().map(|plan| plan.status), Some(PlanStatus::Cancelled));
}

#[test]
fn todo_and_plan_edits_are_independent() {
    let mut doc = todo_doc(&["a"]);
    doc.plan = Some(Plan::new("release"));

    doc.add_phase(Phase::new("p0")).unwrap();
    doc.remove_todo_item(0).unwrap();

    assert!(doc.todo_items().is_empty());
    assert!(doc.todo_list.is_some());
    assert_eq!(phase_titles(&doc), ["p0"]);
}
