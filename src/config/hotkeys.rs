//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per view.

use super::ConfigError;
use crate::state::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::HashMap, fmt, str::FromStr};

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // List view actions
    NavigateNext,
    NavigatePrev,
    AddPlant,
    ToggleLog,
    Quit,

    // Add view actions
    NavigateFieldNext,
    NavigateFieldPrev,
    DeleteChar,
    SubmitForm,
    Cancel,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn new(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn char(c: char) -> Self {
        Hotkey::new(KeyCode::Char(c))
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hotkey_display(self))
    }
}

/// Parse the display form back into a hotkey, e.g. `j`, `Down`, `Ctrl+c` or
/// `Shift+Tab`.
///
impl FromStr for Hotkey {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidHotkey(text.to_string());
        let (modifier_part, key_part) = if text == "+" {
            ("", "+")
        } else if let Some(prefix) = text.strip_suffix("++") {
            (prefix, "+")
        } else {
            text.rsplit_once('+').unwrap_or(("", text))
        };

        let mut modifiers = KeyModifiers::empty();
        if !modifier_part.is_empty() {
            for name in modifier_part.split('+') {
                modifiers |= parse_modifier(name).ok_or_else(invalid)?;
            }
        }

        let mut code = parse_key_code(key_part).ok_or_else(invalid)?;
        if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
            code = KeyCode::BackTab;
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Ok(Hotkey { code, modifiers })
    }
}

fn parse_modifier(name: &str) -> Option<KeyModifiers> {
    if name.eq_ignore_ascii_case("ctrl") || name.eq_ignore_ascii_case("control") {
        Some(KeyModifiers::CONTROL)
    } else if name.eq_ignore_ascii_case("shift") {
        Some(KeyModifiers::SHIFT)
    } else if name.eq_ignore_ascii_case("alt") {
        Some(KeyModifiers::ALT)
    } else {
        None
    }
}

fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let code = match name {
        "Space" => KeyCode::Char(' '),
        "Esc" => KeyCode::Esc,
        "Enter" => KeyCode::Enter,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "BackTab" => KeyCode::BackTab,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        _ => return None,
    };
    Some(code)
}

impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Key bindings for one view. An action may be bound to several keys.
///
pub type Bindings = HashMap<HotkeyAction, Vec<Hotkey>>;

/// Maps hotkey actions to their key bindings for each view.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewHotkeys {
    pub list: Bindings,
    pub add: Bindings,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

/// Bindings read from the config are laid over the defaults, so a file only
/// replaces the actions it names. An action mapped to an empty list is
/// unbound.
///
impl<'de> Deserialize<'de> for ViewHotkeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Overrides {
            #[serde(default)]
            list: Bindings,
            #[serde(default)]
            add: Bindings,
        }

        let overrides = Overrides::deserialize(deserializer)?;
        let mut hotkeys = default_hotkeys();
        hotkeys.list.extend(overrides.list);
        hotkeys.add.extend(overrides.add);
        Ok(hotkeys)
    }
}

impl ViewHotkeys {
    /// Return the bindings for a view.
    ///
    pub fn for_view(&self, view: View) -> &Bindings {
        match view {
            View::List => &self.list,
            View::Add => &self.add,
        }
    }

    /// Fail if a key would trigger two different actions in the same view.
    ///
    pub fn check_conflicts(&self) -> Result<(), ConfigError> {
        for view in [View::List, View::Add] {
            let mut seen: HashMap<(KeyCode, KeyModifiers), HotkeyAction> = HashMap::new();
            for (action, keys) in self.for_view(view) {
                for hotkey in keys {
                    let slot = (
                        hotkey.code,
                        significant_modifiers(hotkey.code, hotkey.modifiers),
                    );
                    match seen.insert(slot, *action) {
                        Some(other) if other != *action => {
                            return Err(ConfigError::ConflictingHotkey {
                                view: view.title().to_string(),
                                key: hotkey.to_string(),
                                first: other,
                                second: *action,
                            });
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}

/// Returns default hotkey mappings for all views.
///
pub fn default_hotkeys() -> ViewHotkeys {
    ViewHotkeys {
        list: default_list_hotkeys(),
        add: default_add_hotkeys(),
    }
}

fn default_list_hotkeys() -> Bindings {
    let mut list = HashMap::new();
    list.insert(
        HotkeyAction::NavigateNext,
        vec![Hotkey::char('j'), Hotkey::new(KeyCode::Down)],
    );
    list.insert(
        HotkeyAction::NavigatePrev,
        vec![Hotkey::char('k'), Hotkey::new(KeyCode::Up)],
    );
    list.insert(HotkeyAction::AddPlant, vec![Hotkey::char('a')]);
    list.insert(HotkeyAction::ToggleLog, vec![Hotkey::char('l')]);
    list.insert(HotkeyAction::Quit, vec![Hotkey::char('q')]);
    list
}

fn default_add_hotkeys() -> Bindings {
    let mut add = HashMap::new();
    add.insert(
        HotkeyAction::NavigateFieldNext,
        vec![Hotkey::new(KeyCode::Tab), Hotkey::new(KeyCode::Down)],
    );
    add.insert(
        HotkeyAction::NavigateFieldPrev,
        vec![Hotkey::new(KeyCode::BackTab), Hotkey::new(KeyCode::Up)],
    );
    add.insert(HotkeyAction::DeleteChar, vec![Hotkey::new(KeyCode::Backspace)]);
    add.insert(HotkeyAction::SubmitForm, vec![Hotkey::new(KeyCode::Enter)]);
    add.insert(HotkeyAction::Cancel, vec![Hotkey::new(KeyCode::Esc)]);
    add
}

/// Shift is implied by the key itself for characters and BackTab.
///
fn significant_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code
        && significant_modifiers(event.code, event.modifiers)
            == significant_modifiers(hotkey.code, hotkey.modifiers)
}

/// Gets the action for a KeyEvent in a specific view.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    view: View,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_view(view)
        .iter()
        .find(|(_, keys)| keys.iter().any(|hotkey| matches_hotkey(event, hotkey)))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &Bindings,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let key = first_hotkey_display(hotkeys, *action)?;
            let paired = paired_action.and_then(|paired| first_hotkey_display(hotkeys, paired));
            Some(match paired {
                Some(paired) => format!(" {}/{}: {}", key, paired, description),
                None => format!(" {}: {}", key, description),
            })
        })
        .collect();

    parts.join(",")
}

/// Display text of the first key bound to an action, if any.
///
pub fn first_hotkey_display(hotkeys: &Bindings, action: HotkeyAction) -> Option<String> {
    hotkeys
        .get(&action)
        .and_then(|keys| keys.first())
        .map(format_hotkey_display)
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
