use super::*;
use proptest::prelude::*;

fn id(raw: &str) -> NodeId {
    NodeId::new(raw)
}

fn file(raw: &str, name: &str) -> Node {
    Node::file(id(raw), name, LanguageId::for_file_name(name), "")
}

fn state_with(nodes: impl IntoIterator<Item = Node>) -> WorkspaceState {
    WorkspaceState::from_tree(FileTree::from_nodes(nodes), &Settings::default())
}

fn open_ids(state: &WorkspaceState) -> Vec<&str> {
    state.open().iter().map(|id| id.as_str()).collect()
}

fn assert_consistent(state: &WorkspaceState) {
    if let Some(selected) = state.selected() {
        assert!(
            state.tree().find_file(selected).is_some(),
            "selection {selected} dangles"
        );
    }
    for (ix, open) in state.open().iter().enumerate() {
        assert!(state.tree().find_file(open).is_some(), "tab {open} dangles");
        assert!(!state.open()[..ix].contains(open), "tab {open} repeated");
    }
    assert!(state.tree().duplicate_id().is_none());
}

#[test]
fn new_session_seeds_main_py() {
    let state = WorkspaceState::new(&Settings::default());
    let file = state.selected_file().unwrap();
    assert_eq!(file.id.as_str(), SEED_FILE_ID);
    assert_eq!(file.name, "main.py");
    assert_eq!(file.language, LanguageId::Python);
    assert!(file.content.contains("Hello, Bharat!"));
    assert_eq!(open_ids(&state), vec![SEED_FILE_ID]);
}

#[test]
fn deleting_the_only_file_empties_the_session() {
    let mut state = WorkspaceState::new(&Settings::default());
    assert!(state.delete_node(&id("1")));
    assert_eq!(state.selected(), None);
    assert!(state.open().is_empty());
    assert!(state.tree().is_empty());
}

#[test]
fn closing_selected_tab_selects_new_last_tab() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py"), file("3", "c.py")]);
    state.select_file(&id("2"));
    state.select_file(&id("3"));
    assert_eq!(open_ids(&state), vec!["1", "2", "3"]);
    assert_eq!(state.selected(), Some(&id("3")));

    assert!(state.close_file(&id("3")));
    assert_eq!(open_ids(&state), vec!["1", "2"]);
    assert_eq!(state.selected(), Some(&id("2")));
}

#[test]
fn closing_middle_selected_tab_still_picks_last_tab() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py"), file("3", "c.py")]);
    state.select_file(&id("2"));
    state.select_file(&id("3"));
    state.select_file(&id("2"));

    state.close_file(&id("2"));
    assert_eq!(open_ids(&state), vec!["1", "3"]);
    assert_eq!(state.selected(), Some(&id("3")));
}

#[test]
fn closing_unselected_tab_keeps_selection() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py")]);
    state.select_file(&id("2"));
    assert!(state.close_file(&id("1")));
    assert_eq!(state.selected(), Some(&id("2")));
    assert!(!state.close_file(&id("1")));
}

#[test]
fn closing_last_tab_clears_selection() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py")]);
    state.close_file(&id("1"));
    assert_eq!(state.selected(), None);
    assert!(state.open().is_empty());
}

#[test]
fn selecting_open_tab_does_not_reorder() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py")]);
    state.select_file(&id("2"));
    assert!(state.select_file(&id("1")));
    assert_eq!(open_ids(&state), vec!["1", "2"]);
    assert_eq!(state.selected(), Some(&id("1")));
    assert!(!state.select_file(&id("1")));
}

#[test]
fn folders_and_missing_ids_cannot_be_selected() {
    let mut state = state_with([file("1", "a.py"), Node::folder(id("f"), "f")]);
    assert!(!state.select_file(&id("f")));
    assert!(!state.select_file(&id("missing")));
    assert_eq!(state.selected(), Some(&id("1")));
    assert_eq!(open_ids(&state), vec!["1"]);
}

#[test]
fn create_file_on_empty_tree_opens_and_selects_it() {
    let mut state = state_with(Vec::<Node>::new());
    let created = state
        .create_file(None, "app.js", LanguageId::JavaScript)
        .unwrap();

    assert_eq!(state.tree().roots().len(), 1);
    let node = state.tree().find_file(&created).unwrap();
    assert_eq!(node.name, "app.js");
    assert_eq!(node.language, LanguageId::JavaScript);
    assert_eq!(state.selected(), Some(&created));
    assert_eq!(state.open(), &[created]);
}

#[test]
fn create_file_under_missing_folder_changes_nothing() {
    let mut state = WorkspaceState::new(&Settings::default());
    let before = state.tree().clone();

    let created = state.create_file(Some(&id("folderA")), "x.py", LanguageId::Python);
    assert!(created.is_none());
    assert!(state.tree().same_as(&before));
    assert_eq!(state.tree().len(), 1);
    assert_eq!(open_ids(&state), vec![SEED_FILE_ID]);
}

#[test]
fn create_folder_leaves_tabs_alone() {
    let mut state = WorkspaceState::new(&Settings::default());
    let folder = state.create_folder(None, "src").unwrap();
    assert_eq!(state.tree().find(&folder).unwrap().kind(), NodeKind::Folder);
    assert_eq!(open_ids(&state), vec![SEED_FILE_ID]);
    assert_eq!(state.selected(), Some(&id(SEED_FILE_ID)));

    let nested = state
        .create_file(Some(&folder), "util.py", LanguageId::Python)
        .unwrap();
    assert_eq!(state.tree().find(&folder).unwrap().children().len(), 1);
    assert_eq!(state.selected(), Some(&nested));
}

#[test]
fn created_ids_are_unique() {
    let mut state = state_with(Vec::<Node>::new());
    let mut seen = Vec::new();
    for ix in 0..50 {
        let created = state
            .create_file(None, &format!("f{ix}.py"), LanguageId::Python)
            .unwrap();
        assert!(!seen.contains(&created));
        seen.push(created);
    }
    assert!(state.tree().duplicate_id().is_none());
}

#[test]
fn deleting_folder_closes_descendant_tabs_and_repairs_selection() {
    let mut state = state_with([file("c", "c.py"), Node::folder(id("f"), "f")]);
    state.create_file(Some(&id("f")), "a.py", LanguageId::Python);
    let b = state
        .create_file(Some(&id("f")), "b.py", LanguageId::Python)
        .unwrap();
    assert_eq!(state.open().len(), 3);
    assert_eq!(state.selected(), Some(&b));

    assert!(state.delete_node(&id("f")));
    assert_eq!(open_ids(&state), vec!["c"]);
    assert_eq!(state.selected(), Some(&id("c")));
}

#[test]
fn deleting_selected_file_without_tabs_falls_back_to_first_file() {
    let tree = FileTree::from_nodes([file("1", "a.py"), Node::folder(id("f"), "f")])
        .insert(Some(&id("f")), file("2", "b.py"));
    let mut state = WorkspaceState::from_tree(tree, &Settings::default());
    assert_eq!(open_ids(&state), vec!["1"]);

    state.delete_node(&id("1"));
    assert!(state.open().is_empty());
    assert_eq!(state.selected(), Some(&id("2")));
}

#[test]
fn deleting_unselected_file_keeps_selection() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py")]);
    state.select_file(&id("2"));
    state.delete_node(&id("1"));
    assert_eq!(state.selected(), Some(&id("2")));
    assert_eq!(open_ids(&state), vec!["2"]);
}

#[test]
fn deleting_missing_id_is_noop() {
    let mut state = WorkspaceState::new(&Settings::default());
    assert!(!state.delete_node(&id("missing")));
    assert_eq!(open_ids(&state), vec![SEED_FILE_ID]);
}

#[test]
fn deleting_folder_prunes_explorer_state() {
    let mut state = state_with([Node::folder(id("f"), "f")]);
    assert!(state.toggle_folder(&id("f")));
    assert!(state.start_create(Some(id("f")), NodeKind::File));
    state.delete_node(&id("f"));
    assert!(!state.explorer.is_expanded(&id("f")));
    assert!(state.explorer.pending().is_none());
}

#[test]
fn update_content_only_touches_files() {
    let mut state = WorkspaceState::new(&Settings::default());
    assert!(state.update_content(&id("1"), "print(2)"));
    assert_eq!(state.selected_file().unwrap().content, "print(2)");
    assert!(!state.update_content(&id("1"), "print(2)"));

    let folder = state.create_folder(None, "src").unwrap();
    assert!(!state.update_content(&folder, "x"));
}

#[test]
fn open_files_resolve_in_tab_order() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py")]);
    state.select_file(&id("2"));
    let open = state.open_files();
    let names: Vec<&str> = open.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["a.py", "b.py"]);
}

#[test]
fn closing_fallback_selection_without_tab_clears_it() {
    let mut state = state_with([file("1", "a.py"), file("2", "b.py")]);
    state.delete_node(&id("1"));
    assert!(state.open().is_empty());
    assert_eq!(state.selected(), Some(&id("2")));

    assert!(state.close_file(&id("2")));
    assert_eq!(state.selected(), None);
    assert!(state.open().is_empty());
    assert!(!state.close_file(&id("2")));
}

#[derive(Debug, Clone)]
enum Op {
    Select(prop::sample::Index),
    Close(prop::sample::Index),
    Delete(prop::sample::Index),
    CreateFile(Option<prop::sample::Index>),
    CreateFolder(Option<prop::sample::Index>),
    Update(prop::sample::Index),
}

fn op() -> impl Strategy<Value = Op> {
    fn parent() -> impl Strategy<Value = Option<prop::sample::Index>> {
        prop::option::weighted(0.7, any::<prop::sample::Index>())
    }
    prop_oneof![
        any::<prop::sample::Index>().prop_map(Op::Select),
        any::<prop::sample::Index>().prop_map(Op::Close),
        any::<prop::sample::Index>().prop_map(Op::Delete),
        parent().prop_map(Op::CreateFile),
        parent().prop_map(Op::CreateFolder),
        any::<prop::sample::Index>().prop_map(Op::Update),
    ]
}

// Tree ids plus one id that never exists.
fn candidates(state: &WorkspaceState) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = state.tree().iter().map(|node| node.id().clone()).collect();
    ids.push(id("missing"));
    ids
}

fn apply(state: &mut WorkspaceState, step: usize, op: &Op) {
    let ids = candidates(state);
    let pick = |ix: &prop::sample::Index| ids[ix.index(ids.len())].clone();
    match op {
        Op::Select(ix) => {
            state.select_file(&pick(ix));
        }
        Op::Close(ix) => {
            state.close_file(&pick(ix));
        }
        Op::Delete(ix) => {
            state.delete_node(&pick(ix));
        }
        Op::CreateFile(parent) => {
            let parent = parent.as_ref().map(pick);
            state.create_file(parent.as_ref(), &format!("f{step}.py"), LanguageId::Python);
        }
        Op::CreateFolder(parent) => {
            let parent = parent.as_ref().map(pick);
            state.create_folder(parent.as_ref(), &format!("d{step}"));
        }
        Op::Update(ix) => {
            state.update_content(&pick(ix), &format!("# {step}"));
        }
    }
}

proptest! {
    #[test]
    fn selection_never_dangles(ops in prop::collection::vec(op(), 0..200)) {
        let mut state = WorkspaceState::new(&Settings::default());
        for (step, op) in ops.iter().enumerate() {
            apply(&mut state, step, op);
            assert_consistent(&state);
        }
    }
}
