//! Integrationstests für komplette Bearbeitungssitzungen:
//! - Commands über die EditorSession inkl. Undo/Redo/Repeat
//! - Zusammenfassen aufeinanderfolgender Schritte
//! - Viewport-Highlights als Selektions-Beobachter

use brush_edit_core::{
    BrushId, BrushMap, EditError, EditorOptions, EditorSession, EntityId, GroupId, MapGeometry,
    RenameGroupsCommand, ReplaceSelectionCommand, SelectionHighlights, SelectionMode,
    TranslateObjectsCommand,
};
use glam::Vec3;

struct TestMap {
    session: EditorSession,
    world: EntityId,
    floor: BrushId,
    crate_brush: BrushId,
    light: EntityId,
    group: GroupId,
}

/// Karte mit Boden, Kiste (beide worldspawn) und einer gruppierten Lampe.
fn make_test_session(options: &EditorOptions) -> TestMap {
    let mut map = BrushMap::new();
    let wood = map.add_texture("wood/crate");
    let world = map.add_entity("worldspawn", Vec3::ZERO);
    let floor = map
        .add_box_brush(world, Vec3::new(-32.0, -32.0, -4.0), Vec3::new(32.0, 32.0, 0.0), None)
        .expect("Boden anlegbar");
    let crate_brush = map
        .add_box_brush(world, Vec3::ZERO, Vec3::splat(8.0), Some(wood))
        .expect("Kiste anlegbar");
    let group = map.add_group("Lampen");
    let light = map.add_entity("light", Vec3::new(0.0, 0.0, 64.0));
    assert!(map.set_entity_group(light, Some(group)));

    TestMap {
        session: EditorSession::with_map(map, options),
        world,
        floor,
        crate_brush,
        light,
        group,
    }
}

fn crate_min(t: &TestMap) -> Vec3 {
    t.session
        .document()
        .map
        .brush_bounds(t.crate_brush)
        .expect("Kiste hat Bounds")
        .min
}

#[test]
fn test_undo_redo_ist_bitgenaue_rundreise() {
    let mut t = make_test_session(&EditorOptions::default());
    t.session
        .submit(ReplaceSelectionCommand::objects(Vec::new(), vec![t.crate_brush]))
        .expect("Selektion");
    t.session
        .submit(TranslateObjectsCommand::translate(Vec3::new(0.3, 0.1, 0.7)))
        .expect("Verschieben");
    let after_execute = crate_min(&t);

    t.session.undo().expect("Undo");
    assert_eq!(crate_min(&t), Vec3::ZERO);
    t.session.redo().expect("Redo");

    assert_eq!(crate_min(&t), after_execute);
    assert!(!t.session.can_redo());
}

#[test]
fn test_zusammengefasste_schritte_mit_einem_undo_zurueck() {
    let mut t = make_test_session(&EditorOptions::default());
    t.session
        .submit(ReplaceSelectionCommand::objects(Vec::new(), vec![t.crate_brush]))
        .expect("Selektion");
    let steps_before = t.session.history().undo_count();

    t.session
        .submit(TranslateObjectsCommand::translate(Vec3::X))
        .expect("Schritt 1");
    t.session
        .submit(TranslateObjectsCommand::translate(Vec3::Y))
        .expect("Schritt 2");

    assert_eq!(t.session.history().undo_count(), steps_before + 1);
    assert_eq!(crate_min(&t), Vec3::new(1.0, 1.0, 0.0));
    t.session.undo().expect("Undo");
    assert_eq!(crate_min(&t), Vec3::ZERO);
}

#[test]
fn test_ohne_zusammenfassen_zwei_schritte() {
    let options = EditorOptions {
        collate_commands: false,
        ..EditorOptions::default()
    };
    let mut t = make_test_session(&options);
    t.session
        .submit(ReplaceSelectionCommand::objects(Vec::new(), vec![t.crate_brush]))
        .expect("Selektion");

    t.session
        .submit(TranslateObjectsCommand::translate(Vec3::X))
        .expect("Schritt 1");
    t.session
        .submit(TranslateObjectsCommand::translate(Vec3::X))
        .expect("Schritt 2");

    assert_eq!(t.session.history().undo_count(), 3);
    t.session.undo().expect("Undo");
    assert_eq!(crate_min(&t), Vec3::X);
}

#[test]
fn test_neuer_befehl_verwirft_redo() {
    let mut t = make_test_session(&EditorOptions::default());
    t.session
        .submit(ReplaceSelectionCommand::objects(Vec::new(), vec![t.floor]))
        .expect("Selektion 1");
    t.session.undo().expect("Undo");
    assert!(t.session.can_redo());

    t.session
        .submit(ReplaceSelectionCommand::objects(vec![t.light], Vec::new()))
        .expect("Selektion 2");

    assert!(!t.session.can_redo());
    assert!(matches!(
        t.session.redo().expect_err("Redo leer"),
        EditError::NothingToRedo
    ));
}

#[test]
fn test_undo_auf_leerer_history_aendert_nichts() {
    let mut t = make_test_session(&EditorOptions::default());
    let before = t.session.document().selection.snapshot();

    let err = t.session.undo().expect_err("Undo leer");

    assert!(matches!(err, EditError::NothingToUndo));
    assert_eq!(t.session.document().selection.snapshot(), before);
    assert_eq!(crate_min(&t), Vec3::ZERO);
}

#[test]
fn test_gruppen_umbenennen_und_wiederholen() {
    let mut t = make_test_session(&EditorOptions::default());
    t.session
        .submit(ReplaceSelectionCommand::objects(vec![t.light], Vec::new()))
        .expect("Selektion");
    t.session
        .submit(RenameGroupsCommand::rename("Decke"))
        .expect("Umbenennen");
    t.session
        .submit(RenameGroupsCommand::rename("Deckenlampen"))
        .expect("Umbenennen 2");

    let name = |t: &TestMap| t.session.document().map.group(t.group).expect("Gruppe").name.clone();
    assert_eq!(name(&t), "Deckenlampen");
    assert_eq!(t.session.history().undo_name(), Some("Gruppen umbenennen"));

    t.session.undo().expect("Undo");
    assert_eq!(name(&t), "Lampen", "Ein Undo stellt den Ursprungsnamen her");

    t.session.redo().expect("Redo");
    t.session.repeat_last().expect("Repeat");
    assert_eq!(name(&t), "Deckenlampen");
}

#[test]
fn test_repeat_ohne_selektion_nicht_moeglich() {
    let mut t = make_test_session(&EditorOptions::default());
    t.session
        .submit(ReplaceSelectionCommand::objects(Vec::new(), vec![t.crate_brush]))
        .expect("Selektion");
    t.session
        .submit(TranslateObjectsCommand::translate(Vec3::Z))
        .expect("Verschieben");
    t.session
        .document_mut()
        .selection
        .remove_all()
        .expect("Leeren");

    let err = t.session.repeat_last().expect_err("nicht wiederholbar");

    assert!(matches!(err, EditError::NotRepeatable));
}

#[test]
fn test_highlights_folgen_undo_und_redo() {
    let mut t = make_test_session(&EditorOptions::default());
    let (highlights, _) = SelectionHighlights::attach(&mut t.session.document_mut().selection);

    t.session
        .submit(ReplaceSelectionCommand::objects(vec![t.world], vec![t.floor]))
        .expect("Selektion");
    assert_eq!(
        t.session.document().selection.mode(),
        SelectionMode::BrushesAndEntities
    );
    assert!(highlights.borrow().brushes().contains(&t.floor));
    assert!(highlights.borrow().entities().contains(&t.world));

    t.session.undo().expect("Undo");
    assert!(highlights.borrow().is_empty());

    t.session.redo().expect("Redo");
    assert!(highlights.borrow().brushes().contains(&t.floor));
}

#[test]
fn test_flaechen_ersetzen_behaelt_ueberschneidung_hervorgehoben() {
    let mut t = make_test_session(&EditorOptions::default());
    let faces: Vec<_> = t.session.document().map.brush_faces(t.crate_brush).to_vec();
    let (highlights, _) = SelectionHighlights::attach(&mut t.session.document_mut().selection);
    t.session
        .submit(ReplaceSelectionCommand::faces(faces[..2].to_vec()))
        .expect("Flächen");
    assert_eq!(highlights.borrow().faces().len(), 2);

    t.session
        .submit(ReplaceSelectionCommand::faces(vec![faces[0]]))
        .expect("Flächen ersetzen");

    let highlights = highlights.borrow();
    assert_eq!(highlights.faces().len(), 1);
    assert!(highlights.faces().contains(&faces[0]));
    assert_eq!(t.session.document().selection.mode(), SelectionMode::Faces);
}
