//! Brush Edit Core Demo.
//!
//! Baut eine kleine Karte auf und spielt eine Bearbeitungssitzung durch:
//! Selektieren, Verschieben, Gruppen umbenennen, Undo, Redo und Wiederholen.

use brush_edit_core::{
    BrushMap, EditorOptions, EditorSession, MapGeometry, RenameGroupsCommand,
    ReplaceSelectionCommand, SelectionHighlights, TranslateObjectsCommand,
};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Brush Edit Core v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut map = BrushMap::with_point_entity_size(options.point_entity_size);
    let stone = map.add_texture("stone/wall01");
    let world = map.add_entity("worldspawn", Vec3::ZERO);
    let floor = map
        .add_box_brush(world, Vec3::new(-64.0, -64.0, -8.0), Vec3::new(64.0, 64.0, 0.0), Some(stone))
        .ok_or_else(|| anyhow::anyhow!("Boden-Brush konnte nicht angelegt werden"))?;
    let door = map.add_entity("func_door", Vec3::ZERO);
    let door_texture = map.find_texture("stone/wall01");
    let door_brush = map
        .add_box_brush(door, Vec3::new(0.0, -4.0, 0.0), Vec3::new(32.0, 4.0, 64.0), door_texture)
        .ok_or_else(|| anyhow::anyhow!("Tür-Brush konnte nicht angelegt werden"))?;
    let lights = map.add_group("Lichter");
    let light = map.add_entity("light", Vec3::new(0.0, 0.0, 96.0));
    map.set_entity_group(light, Some(lights));

    let mut session = EditorSession::with_map(map, &options);
    let (highlights, _subscription) =
        SelectionHighlights::attach(&mut session.document_mut().selection);

    session.submit(ReplaceSelectionCommand::objects(vec![door], vec![door_brush]))?;
    session.submit(TranslateObjectsCommand::translate(Vec3::X * 16.0))?;
    session.submit(TranslateObjectsCommand::translate(Vec3::X * 16.0))?;
    session.repeat_last()?;

    let bounds = session.document().selection.bounds(&session.document().map)?;
    log::info!("Tür-Bounds nach dem Verschieben: {:?} .. {:?}", bounds.min, bounds.max);

    session.undo()?;
    session.undo()?;
    let floor_bounds = session
        .document()
        .map
        .brush_bounds(floor)
        .ok_or_else(|| anyhow::anyhow!("Boden-Brush fehlt"))?;
    log::info!("Boden unverändert: {:?} .. {:?}", floor_bounds.min, floor_bounds.max);

    session.submit(ReplaceSelectionCommand::objects(vec![light], Vec::new()))?;
    session.submit(RenameGroupsCommand::rename("Deckenlichter"))?;
    log::info!(
        "Hervorgehoben: {} Entities, {} Brushes",
        highlights.borrow().entities().len(),
        highlights.borrow().brushes().len()
    );

    log::info!(
        "History: {} Undo-, {} Redo-Schritte; nächstes Undo: {}",
        session.history().undo_count(),
        session.history().redo_count(),
        session.history().undo_name().unwrap_or("-")
    );
    Ok(())
}
