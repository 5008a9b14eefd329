//! Line-driven front-end: a list view over the roster plus a modal
//! editor sub-loop. Everything runs synchronously on one thread; the
//! only blocking points are reads from the input.
//!
//! The loop is generic over `BufRead`/`Write` so sessions can be
//! scripted in tests with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use charkeep_core::{CharacterClass, Confirmed, Draft, Roster, catalog, repository, validate};

const NOTHING_SELECTED: &str = "Nothing selected. Use: select <N>";

/// Main-window state: the roster, the current (0-based) selection, and
/// the two fixed persistence targets.
pub struct App {
    pub roster: Roster,
    pub selection: Option<usize>,
    json_path: PathBuf,
    xml_path: PathBuf,
}

impl App {
    pub fn new(json_path: PathBuf, xml_path: PathBuf) -> Self {
        Self {
            roster: Roster::new(),
            selection: None,
            json_path,
            xml_path,
        }
    }

    pub fn with_default_paths() -> Self {
        Self::new(
            PathBuf::from(repository::JSON_FILE),
            PathBuf::from(repository::XML_FILE),
        )
    }
}

enum Command {
    List,
    Select(usize),
    Create,
    Clone,
    Edit,
    Delete,
    SaveJson,
    SaveXml,
    LoadJson,
    LoadXml,
    Help,
    Quit,
}

enum EditorCommand {
    Name(String),
    Level(String),
    Health(String),
    Mana(String),
    Class(String),
    Weapon(String),
    Armor(String),
    AbilityAdd(String),
    AbilityDel(String),
    Show,
    Done,
    Cancel,
}

/// Runs the interactive session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "charkeep - type 'help' for commands")?;
    print_list(app, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(out)?,
            Ok(Command::List) => print_list(app, out)?,
            Ok(Command::Select(position)) => select(app, position, out)?,
            Ok(Command::Create) => {
                if let Some(confirmed) = run_editor(Draft::create(), input, out)? {
                    app.roster.add(confirmed.character);
                    writeln!(out, "Character created.")?;
                    print_list(app, out)?;
                }
            }
            Ok(Command::Edit) => edit_selected(app, input, out)?,
            Ok(Command::Clone) => clone_selected(app, out)?,
            Ok(Command::Delete) => delete_selected(app, out)?,
            Ok(Command::SaveJson) => save(app, Format::Json, out)?,
            Ok(Command::SaveXml) => save(app, Format::Xml, out)?,
            Ok(Command::LoadJson) => load(app, Format::Json, out)?,
            Ok(Command::LoadXml) => load(app, Format::Xml, out)?,
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Format {
    Json,
    Xml,
}

fn select<W: Write>(app: &mut App, position: usize, out: &mut W) -> io::Result<()> {
    if position == 0 || position > app.roster.len() {
        writeln!(
            out,
            "No character at position {position} (roster has {})",
            app.roster.len()
        )?;
        return Ok(());
    }
    app.selection = Some(position - 1);
    // selection is positional, echo the record it points at
    if let Some(character) = app.roster.get(position - 1) {
        writeln!(out, "Selected {position}: {character}")?;
    }
    Ok(())
}

fn edit_selected<R: BufRead, W: Write>(
    app: &mut App,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(index) = app.selection else {
        writeln!(out, "{NOTHING_SELECTED}")?;
        return Ok(());
    };
    let Some(original) = app.roster.get(index) else {
        writeln!(out, "{NOTHING_SELECTED}")?;
        return Ok(());
    };

    let draft = Draft::edit(index, original);
    if let Some(confirmed) = run_editor(draft, input, out)? {
        let target = confirmed.target.unwrap_or(index);
        match app.roster.replace(target, confirmed.character) {
            Ok(()) => {
                writeln!(out, "Character updated.")?;
                print_list(app, out)?;
            }
            Err(e) => writeln!(out, "Cannot update character: {}", e.message)?,
        }
    }
    Ok(())
}

fn clone_selected<W: Write>(app: &mut App, out: &mut W) -> io::Result<()> {
    let Some(index) = app.selection else {
        writeln!(out, "{NOTHING_SELECTED}")?;
        return Ok(());
    };
    match app.roster.clone_at(index) {
        Ok(new_index) => {
            app.selection = Some(new_index);
            writeln!(out, "Cloned to position {}.", new_index + 1)?;
            print_list(app, out)?;
        }
        Err(e) => writeln!(out, "Cannot clone: {}", e.message)?,
    }
    Ok(())
}

fn delete_selected<W: Write>(app: &mut App, out: &mut W) -> io::Result<()> {
    let Some(index) = app.selection else {
        writeln!(out, "{NOTHING_SELECTED}")?;
        return Ok(());
    };
    match app.roster.remove(index) {
        Ok(removed) => {
            app.selection = None;
            writeln!(out, "Deleted {}.", removed.name)?;
            print_list(app, out)?;
        }
        Err(e) => writeln!(out, "Cannot delete: {}", e.message)?,
    }
    Ok(())
}

fn save<W: Write>(app: &App, format: Format, out: &mut W) -> io::Result<()> {
    if app.roster.is_empty() {
        writeln!(out, "No characters to save.")?;
        return Ok(());
    }
    let (result, path) = match format {
        Format::Json => (
            repository::save_json(&app.json_path, app.roster.characters()),
            &app.json_path,
        ),
        Format::Xml => (
            repository::save_xml(&app.xml_path, app.roster.characters()),
            &app.xml_path,
        ),
    };
    match result {
        Ok(()) => writeln!(
            out,
            "Saved {} character(s) to {}",
            app.roster.len(),
            path.display()
        ),
        Err(e) => writeln!(out, "Error saving {}: {}", path.display(), e.message),
    }
}

fn load<W: Write>(app: &mut App, format: Format, out: &mut W) -> io::Result<()> {
    let (result, path) = match format {
        Format::Json => (repository::load_json(&app.json_path), &app.json_path),
        Format::Xml => (repository::load_xml(&app.xml_path), &app.xml_path),
    };
    match result {
        Ok(characters) => {
            writeln!(
                out,
                "Loaded {} character(s) from {}",
                characters.len(),
                path.display()
            )?;
            app.roster.reload(characters);
            app.selection = None;
            print_list(app, out)
        }
        // a failed load leaves the current roster in place
        Err(e) => writeln!(out, "Error loading {}: {}", path.display(), e.message),
    }
}

/// The modal editor: owns a draft, commits only on `done`, and returns
/// `None` when cancelled (including end of input).
fn run_editor<R: BufRead, W: Write>(
    mut draft: Draft,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Confirmed>> {
    writeln!(out, "-- editing (type 'done' to save, 'cancel' to discard) --")?;
    write!(out, "{}", charkeep_render::render_sheet(draft.character()))?;

    loop {
        write!(out, "edit> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out, "Edit cancelled.")?;
            return Ok(None);
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_editor_command(line) {
            Ok(EditorCommand::Cancel) => {
                writeln!(out, "Edit cancelled.")?;
                return Ok(None);
            }
            Ok(EditorCommand::Done) => match validate(draft.character()) {
                Ok(()) => return Ok(draft.confirm().ok()),
                Err(e) => writeln!(out, "Cannot save: {}", e.message)?,
            },
            Ok(EditorCommand::Show) => {
                write!(out, "{}", charkeep_render::render_sheet(draft.character()))?
            }
            Ok(EditorCommand::Name(value)) => draft.set_name(&value),
            Ok(EditorCommand::Level(value)) => match value.parse() {
                Ok(level) => draft.set_level(level),
                Err(_) => writeln!(out, "Level must be a number")?,
            },
            Ok(EditorCommand::Health(value)) => match value.parse() {
                Ok(health) => draft.set_health(health),
                Err(_) => writeln!(out, "Health must be a number")?,
            },
            Ok(EditorCommand::Mana(value)) => match value.parse() {
                Ok(mana) => draft.set_mana(mana),
                Err(_) => writeln!(out, "Mana must be a number")?,
            },
            Ok(EditorCommand::Class(value)) => match CharacterClass::from_name(&value) {
                Some(class) => draft.set_class(class),
                None => writeln!(out, "Unknown class '{value}'; one of: {}", class_names())?,
            },
            Ok(EditorCommand::Weapon(value)) => draft.set_weapon_type(&value),
            Ok(EditorCommand::Armor(value)) => draft.set_armor_type(&value),
            Ok(EditorCommand::AbilityAdd(value)) => {
                if !draft.add_ability(&value) {
                    writeln!(out, "Ability text must not be blank")?;
                }
            }
            Ok(EditorCommand::AbilityDel(value)) => match value.parse::<usize>() {
                Ok(position) if position >= 1 => match draft.remove_ability(position - 1) {
                    Ok(removed) => writeln!(out, "Removed ability '{removed}'")?,
                    Err(_) => writeln!(out, "No ability at position {position}")?,
                },
                _ => writeln!(out, "ability-del takes a 1-based position")?,
            },
            Err(message) => writeln!(out, "{message}")?,
        }
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let (word, rest) = split_word(line);
    match word {
        "list" => Ok(Command::List),
        "select" => rest
            .parse()
            .map(Command::Select)
            .map_err(|_| "Usage: select <N>".to_string()),
        "create" => Ok(Command::Create),
        "clone" => Ok(Command::Clone),
        "edit" => Ok(Command::Edit),
        "delete" => Ok(Command::Delete),
        "save-json" => Ok(Command::SaveJson),
        "save-xml" => Ok(Command::SaveXml),
        "load-json" => Ok(Command::LoadJson),
        "load-xml" => Ok(Command::LoadXml),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{other}'; type 'help'")),
    }
}

fn parse_editor_command(line: &str) -> Result<EditorCommand, String> {
    let (word, rest) = split_word(line);
    let value = rest.to_string();
    match word {
        "name" => require_value(word, value).map(EditorCommand::Name),
        "level" => require_value(word, value).map(EditorCommand::Level),
        "health" => require_value(word, value).map(EditorCommand::Health),
        "mana" => require_value(word, value).map(EditorCommand::Mana),
        "class" => require_value(word, value).map(EditorCommand::Class),
        "weapon" => require_value(word, value).map(EditorCommand::Weapon),
        "armor" => require_value(word, value).map(EditorCommand::Armor),
        "ability-add" => require_value(word, value).map(EditorCommand::AbilityAdd),
        "ability-del" => require_value(word, value).map(EditorCommand::AbilityDel),
        "show" => Ok(EditorCommand::Show),
        "done" | "save" => Ok(EditorCommand::Done),
        "cancel" => Ok(EditorCommand::Cancel),
        other => Err(format!("Unknown editor command '{other}'")),
    }
}

fn require_value(word: &str, value: String) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("Usage: {word} <value>"))
    } else {
        Ok(value)
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn print_list<W: Write>(app: &App, out: &mut W) -> io::Result<()> {
    write!(out, "{}", charkeep_render::render_roster(app.roster.characters()))
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  list                show the roster")?;
    writeln!(out, "  select <N>          select a character by position")?;
    writeln!(out, "  create              open the editor for a new character")?;
    writeln!(out, "  clone               append a copy of the selection")?;
    writeln!(out, "  edit                edit the selection")?;
    writeln!(out, "  delete              remove the selection")?;
    writeln!(out, "  save-json/save-xml  write the roster to disk")?;
    writeln!(out, "  load-json/load-xml  replace the roster from disk")?;
    writeln!(out, "  quit                leave (unsaved changes are lost)")?;
    writeln!(out, "Editor commands:")?;
    writeln!(
        out,
        "  name/level/health/mana/class/weapon/armor <value>, ability-add <text>,"
    )?;
    writeln!(out, "  ability-del <N>, show, done, cancel")?;
    writeln!(out, "  classes: {}", class_names())?;
    writeln!(out, "  weapons: {}", catalog::WEAPON_OPTIONS.join(", "))?;
    writeln!(out, "  armor:   {}", catalog::ARMOR_OPTIONS.join(", "))?;
    Ok(())
}

fn class_names() -> String {
    CharacterClass::ALL
        .iter()
        .map(|class| class.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
