//! Umbenennen aller Gruppen, zu denen selektierte Entities gehören.

use crate::app::document::EditorDocument;
use crate::app::error::EditError;
use crate::app::history::{Command, CommandKind};
use crate::core::GroupId;
use indexmap::{IndexMap, IndexSet};
use std::any::Any;

/// Benennt die Gruppen der aktuell selektierten Entities um.
#[derive(Debug, Clone)]
pub struct RenameGroupsCommand {
    new_name: String,
    /// Alte Namen je Gruppe, erfasst beim ersten `perform_do`
    old_names: Option<IndexMap<GroupId, String>>,
}

impl RenameGroupsCommand {
    /// Typkennung
    pub const KIND: CommandKind = CommandKind::new("rename_groups");

    /// Erstellt einen Umbenennungs-Command für die selektierten Gruppen.
    pub fn rename(new_name: impl Into<String>) -> Self {
        Self {
            new_name: new_name.into(),
            old_names: None,
        }
    }

    /// Neuer Gruppenname.
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    fn target_groups(&self) -> Option<IndexSet<GroupId>> {
        self.old_names
            .as_ref()
            .map(|old| old.keys().copied().collect())
    }
}

/// Gruppen aller selektierten Entities in Selektionsreihenfolge.
fn selected_groups(document: &EditorDocument) -> IndexSet<GroupId> {
    document
        .selection
        .entities()
        .iter()
        .filter_map(|e| document.map.entity(*e).and_then(|entity| entity.group))
        .filter(|g| document.map.group(*g).is_some())
        .collect()
}

impl Command for RenameGroupsCommand {
    fn kind(&self) -> CommandKind {
        Self::KIND
    }

    fn name(&self) -> &str {
        "Gruppen umbenennen"
    }

    fn perform_do(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        let groups = match self.target_groups() {
            Some(groups) => groups,
            None => selected_groups(document),
        };
        if groups.is_empty() {
            return Err(EditError::perform_failed(self.name(), "keine Gruppe selektiert"));
        }
        if groups.iter().any(|g| document.map.group(*g).is_none()) {
            return Err(EditError::perform_failed(
                self.name(),
                "Gruppe existiert nicht mehr",
            ));
        }

        let mut old_names = IndexMap::with_capacity(groups.len());
        for group_id in groups {
            if let Some(group) = document.map.group_mut(group_id) {
                let previous = std::mem::replace(&mut group.name, self.new_name.clone());
                old_names.insert(group_id, previous);
            }
        }
        log::debug!(
            "{} Gruppe(n) umbenannt in '{}'",
            old_names.len(),
            self.new_name
        );
        self.old_names.get_or_insert(old_names);
        Ok(())
    }

    fn perform_undo(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        let Some(old_names) = &self.old_names else {
            return Err(EditError::perform_failed(self.name(), "wurde nie ausgeführt"));
        };
        if old_names.keys().any(|g| document.map.group(*g).is_none()) {
            return Err(EditError::perform_failed(
                self.name(),
                "Gruppe existiert nicht mehr",
            ));
        }
        for (group_id, name) in old_names {
            if let Some(group) = document.map.group_mut(*group_id) {
                group.name = name.clone();
            }
        }
        Ok(())
    }

    fn is_repeatable(&self, document: &EditorDocument) -> bool {
        !selected_groups(document).is_empty()
    }

    fn repeat(&self, _document: &EditorDocument) -> Option<Box<dyn Command>> {
        Some(Box::new(Self::rename(self.new_name.clone())))
    }

    fn collate_with(&mut self, next: &dyn Command) -> bool {
        if next.kind() != Self::KIND {
            return false;
        }
        let Some(other) = next.as_any().downcast_ref::<Self>() else {
            return false;
        };
        match (self.target_groups(), other.target_groups()) {
            (Some(mine), Some(theirs)) if mine == theirs => {
                self.new_name = other.new_name.clone();
                true
            }
            _ => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
