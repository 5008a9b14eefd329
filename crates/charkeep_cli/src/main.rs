use std::path::{Path, PathBuf};
use std::process;

use charkeep_core::{CharacterClass, Draft, Roster, repository};
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FormatKind {
    Json,
    Xml,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ClassArg {
    Warrior,
    Mage,
    Rogue,
    Priest,
    Hunter,
}

#[derive(Debug, Parser)]
#[command(version, about = "Inspect and edit a character roster file")]
struct Cli {
    /// Roster file; format inferred from the extension.
    #[arg(value_name = "ROSTER", default_value = repository::JSON_FILE)]
    path: PathBuf,
    #[arg(long, value_name = "json|xml", value_parser = parse_format)]
    format: Option<FormatKind>,
    #[arg(long)]
    list: bool,
    #[arg(long, value_name = "INDEX")]
    show: Option<usize>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    create: bool,
    #[arg(long = "clone", value_name = "INDEX")]
    clone_index: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    edit: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    delete: Option<usize>,
    #[arg(long = "set-name", value_name = "NAME")]
    set_name: Option<String>,
    #[arg(long = "set-level", allow_hyphen_values = true)]
    set_level: Option<i32>,
    #[arg(long = "set-health", allow_hyphen_values = true)]
    set_health: Option<i32>,
    #[arg(long = "set-mana", allow_hyphen_values = true)]
    set_mana: Option<i32>,
    #[arg(long = "set-class")]
    set_class: Option<ClassArg>,
    #[arg(long = "set-weapon", value_name = "TEXT")]
    set_weapon: Option<String>,
    #[arg(long = "set-armor", value_name = "TEXT")]
    set_armor: Option<String>,
    #[arg(long = "add-ability", value_name = "TEXT")]
    add_ability: Vec<String>,
    #[arg(long = "remove-ability", value_name = "INDEX")]
    remove_ability: Option<usize>,
    /// Write the resulting roster here instead of back to ROSTER;
    /// the extension picks the output format.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mutator_count = usize::from(cli.create)
        + usize::from(cli.clone_index.is_some())
        + usize::from(cli.edit.is_some())
        + usize::from(cli.delete.is_some());
    if mutator_count > 1 {
        eprintln!("--create, --clone, --edit and --delete are mutually exclusive");
        process::exit(2);
    }

    let has_field_edits = cli.set_name.is_some()
        || cli.set_level.is_some()
        || cli.set_health.is_some()
        || cli.set_mana.is_some()
        || cli.set_class.is_some()
        || cli.set_weapon.is_some()
        || cli.set_armor.is_some()
        || !cli.add_ability.is_empty()
        || cli.remove_ability.is_some();
    if has_field_edits && !cli.create && cli.edit.is_none() {
        eprintln!("--set-* and ability flags require --create or --edit <INDEX>");
        process::exit(2);
    }

    let format = resolve_format(&cli.path, cli.format).unwrap_or_else(|message| {
        eprintln!("{message}");
        process::exit(2);
    });

    let characters = load(&cli.path, format).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", cli.path.display(), e.message);
        process::exit(1);
    });
    let mut roster = Roster::from(characters);

    let mutated = apply_mutation(&cli, &mut roster, has_field_edits).unwrap_or_else(|message| {
        eprintln!("{message}");
        process::exit(1);
    });

    if mutated || cli.output.is_some() {
        let target = cli.output.as_deref().unwrap_or(&cli.path);
        let target_format = match cli.output.as_deref() {
            Some(path) => format_from_extension(path).unwrap_or(format),
            None => format,
        };
        save(target, target_format, roster.characters()).unwrap_or_else(|e| {
            eprintln!("Error saving {}: {}", target.display(), e.message);
            process::exit(1);
        });
        println!(
            "Saved {} character(s) to {}",
            roster.len(),
            target.display()
        );
    }

    if let Some(position) = cli.show {
        let index = to_zero_based(position).unwrap_or_else(|message| {
            eprintln!("{message}");
            process::exit(2);
        });
        let Some(character) = roster.get(index) else {
            eprintln!("No character at position {position}");
            process::exit(1);
        };
        if cli.json {
            print_json(&charkeep_render::render_json_character(character));
        } else {
            print!("{}", charkeep_render::render_sheet(character));
        }
        return;
    }

    if cli.json {
        print_json(&charkeep_render::render_json_roster(roster.characters()));
        return;
    }

    if cli.list || (!mutated && cli.output.is_none()) {
        print!("{}", charkeep_render::render_roster(roster.characters()));
    }
}

/// Runs the requested mutation against the in-memory roster. Returns
/// whether anything changed; errors are returned as user-facing text.
fn apply_mutation(cli: &Cli, roster: &mut Roster, has_field_edits: bool) -> Result<bool, String> {
    if cli.create {
        let draft = Draft::create();
        let confirmed = fill_draft(cli, draft)?
            .confirm()
            .map_err(|e| format!("Cannot create character: {}", e.message))?;
        roster.add(confirmed.character);
        return Ok(true);
    }

    if let Some(position) = cli.edit {
        let index = to_zero_based(position)?;
        let original = roster
            .get(index)
            .ok_or_else(|| format!("No character at position {position}"))?;
        let draft = Draft::edit(index, original);
        let confirmed = fill_draft(cli, draft)?
            .confirm()
            .map_err(|e| format!("Cannot edit character: {}", e.message))?;
        let target = confirmed.target.unwrap_or(index);
        roster
            .replace(target, confirmed.character)
            .map_err(|e| e.message)?;
        return Ok(true);
    }

    if let Some(position) = cli.clone_index {
        let index = to_zero_based(position)?;
        roster
            .clone_at(index)
            .map_err(|_| format!("No character at position {position}"))?;
        return Ok(true);
    }

    if let Some(position) = cli.delete {
        let index = to_zero_based(position)?;
        roster
            .remove(index)
            .map_err(|_| format!("No character at position {position}"))?;
        return Ok(true);
    }

    // checked in main: field edits only arrive with --create/--edit
    debug_assert!(!has_field_edits);
    Ok(false)
}

fn fill_draft(cli: &Cli, mut draft: Draft) -> Result<Draft, String> {
    if let Some(name) = &cli.set_name {
        draft.set_name(name);
    }
    if let Some(level) = cli.set_level {
        draft.set_level(level);
    }
    if let Some(health) = cli.set_health {
        draft.set_health(health);
    }
    if let Some(mana) = cli.set_mana {
        draft.set_mana(mana);
    }
    if let Some(class) = cli.set_class {
        draft.set_class(to_core_class(class));
    }
    if let Some(weapon) = &cli.set_weapon {
        draft.set_weapon_type(weapon);
    }
    if let Some(armor) = &cli.set_armor {
        draft.set_armor_type(armor);
    }
    if let Some(position) = cli.remove_ability {
        let index = to_zero_based(position)?;
        draft
            .remove_ability(index)
            .map_err(|_| format!("No ability at position {position}"))?;
    }
    for ability in &cli.add_ability {
        if !draft.add_ability(ability) {
            return Err("Ability text must not be blank".to_string());
        }
    }
    Ok(draft)
}

fn load(
    path: &Path,
    format: FormatKind,
) -> Result<Vec<charkeep_core::Character>, charkeep_core::CoreError> {
    match format {
        FormatKind::Json => repository::load_json(path),
        FormatKind::Xml => repository::load_xml(path),
    }
}

fn save(
    path: &Path,
    format: FormatKind,
    characters: &[charkeep_core::Character],
) -> Result<(), charkeep_core::CoreError> {
    match format {
        FormatKind::Json => repository::save_json(path, characters),
        FormatKind::Xml => repository::save_xml(path, characters),
    }
}

fn print_json(value: &serde_json::Value) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn resolve_format(path: &Path, forced: Option<FormatKind>) -> Result<FormatKind, String> {
    if let Some(format) = forced {
        return Ok(format);
    }
    format_from_extension(path).ok_or_else(|| {
        format!(
            "cannot infer roster format from '{}'; pass --format json|xml",
            path.display()
        )
    })
}

fn format_from_extension(path: &Path) -> Option<FormatKind> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "json" => Some(FormatKind::Json),
        "xml" => Some(FormatKind::Xml),
        _ => None,
    }
}

fn parse_format(value: &str) -> Result<FormatKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "json" => Ok(FormatKind::Json),
        "xml" => Ok(FormatKind::Xml),
        _ => Err(format!("invalid format '{value}', expected json or xml")),
    }
}

fn to_core_class(class: ClassArg) -> CharacterClass {
    match class {
        ClassArg::Warrior => CharacterClass::Warrior,
        ClassArg::Mage => CharacterClass::Mage,
        ClassArg::Rogue => CharacterClass::Rogue,
        ClassArg::Priest => CharacterClass::Priest,
        ClassArg::Hunter => CharacterClass::Hunter,
    }
}

/// User-facing indices are 1-based, as printed by `--list`.
fn to_zero_based(position: usize) -> Result<usize, String> {
    if position == 0 {
        return Err("positions are 1-based; 0 is not a valid position".to_string());
    }
    Ok(position - 1)
}
