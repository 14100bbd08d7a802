//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical item record shared by list and UI projections.
//! - Map kind and priority onto their fixed display attributes.
//!
//! # Invariants
//! - `kind` never changes after construction; the icon is derived from it.
//! - `priority` is set at construction and not reassigned afterwards.
//! - `title` is the only mutable field.

use serde::{Deserialize, Serialize};

/// Closed category of a to-do item.
///
/// The kind is the sole determinant of the item's icon; there is no
/// per-instance override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToDoItemKind {
    /// Work done in class.
    Classwork,
    /// Work assigned for home.
    Homework,
    /// Leisure entry.
    Game,
}

/// Closed urgency level determining the row's display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Default level for newly created items.
    Normal,
    Low,
    High,
}

/// Fixed icon asset shown next to an item.
///
/// Variants correspond one-to-one with the bundled asset files; the
/// numbering comes from the asset catalog and is not contiguous per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Asset `icon_0`.
    Notebook,
    /// Asset `icon_1`.
    Controller,
    /// Asset `icon_2`.
    Blackboard,
}

impl Icon {
    /// Returns the asset identifier the UI resolves to an image.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Notebook => "icon_0",
            Self::Controller => "icon_1",
            Self::Blackboard => "icon_2",
        }
    }
}

/// Display color as plain 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form for UI layers that take hex colors.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Priority marker colors. `Normal` uses the app's accent green rather
/// than a named system color.
const COLOR_NORMAL: Rgb = Rgb::new(5, 225, 119);
const COLOR_LOW: Rgb = Rgb::new(0, 0, 255);
const COLOR_HIGH: Rgb = Rgb::new(255, 0, 0);

impl Priority {
    /// Returns the fixed display color for this priority.
    ///
    /// Total over the closed enum; there is no fallback branch.
    pub fn color(self) -> Rgb {
        match self {
            Self::Normal => COLOR_NORMAL,
            Self::Low => COLOR_LOW,
            Self::High => COLOR_HIGH,
        }
    }
}

impl ToDoItemKind {
    /// Returns the fixed icon for this kind.
    pub fn icon(self) -> Icon {
        match self {
            Self::Classwork => Icon::Blackboard,
            Self::Homework => Icon::Notebook,
            Self::Game => Icon::Controller,
        }
    }
}

/// Canonical to-do item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    /// Closed item category, fixed for the item's lifetime.
    pub kind: ToDoItemKind,
    /// Free-form title; empty on creation, edited in place afterwards.
    pub title: String,
    /// Urgency level, assigned at construction.
    pub priority: Priority,
}

impl ToDoItem {
    /// Creates an item with the default `Normal` priority.
    pub fn new(kind: ToDoItemKind, title: impl Into<String>) -> Self {
        Self::with_priority(kind, title, Priority::Normal)
    }

    /// Creates an item with an explicit priority.
    ///
    /// Import/restore paths use this; interactive creation always goes
    /// through [`ToDoItem::new`].
    pub fn with_priority(
        kind: ToDoItemKind,
        title: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            priority,
        }
    }

    /// Returns the title with each word capitalized.
    ///
    /// # Contract
    /// - The first alphanumeric character of every word is uppercased and
    ///   the rest of the word is lowercased.
    /// - Non-alphanumeric separators are preserved as-is.
    /// - Does not mutate `title`; applying the result again is a no-op.
    pub fn display_title(&self) -> String {
        let mut out = String::with_capacity(self.title.len());
        let mut at_word_start = true;
        for ch in self.title.chars() {
            if ch.is_alphanumeric() {
                if at_word_start {
                    out.extend(ch.to_uppercase());
                } else {
                    out.extend(ch.to_lowercase());
                }
                at_word_start = false;
            } else {
                out.push(ch);
                at_word_start = true;
            }
        }
        out
    }

    /// Returns the fixed icon derived from `kind`.
    pub fn icon(&self) -> Icon {
        self.kind.icon()
    }

    /// Returns the fixed display color derived from `priority`.
    pub fn color(&self) -> Rgb {
        self.priority.color()
    }
}
