use charkeep_core::{Character, CharacterClass, CoreErrorCode, Roster};

fn named(name: &str) -> Character {
    Character {
        name: name.to_string(),
        ..Character::default()
    }
}

fn names(roster: &Roster) -> Vec<&str> {
    roster.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn add_appends_in_order() {
    let mut roster = Roster::new();
    assert!(roster.is_empty());

    roster.add(named("Aria"));
    roster.add(named("Borin"));
    roster.add(named("Aria"));

    assert_eq!(roster.len(), 3);
    assert_eq!(names(&roster), vec!["Aria", "Borin", "Aria"]);
}

#[test]
fn replace_touches_only_the_target_position() {
    let mut roster = Roster::from(vec![named("Aria"), named("Borin"), named("Cora")]);

    roster
        .replace(1, named("Brand"))
        .expect("replace at valid index");

    assert_eq!(names(&roster), vec!["Aria", "Brand", "Cora"]);
}

#[test]
fn replace_out_of_range_is_bad_index() {
    let mut roster = Roster::from(vec![named("Aria")]);
    let err = roster.replace(1, named("Brand")).expect_err("index 1 of 1");
    assert_eq!(err.code, CoreErrorCode::BadIndex);
    assert_eq!(names(&roster), vec!["Aria"]);
}

#[test]
fn remove_returns_the_record_and_shifts_the_rest() {
    let mut roster = Roster::from(vec![named("Aria"), named("Borin"), named("Cora")]);

    let removed = roster.remove(1).expect("remove at valid index");

    assert_eq!(removed.name, "Borin");
    assert_eq!(names(&roster), vec!["Aria", "Cora"]);

    let err = roster.remove(5).expect_err("index 5 of 2");
    assert_eq!(err.code, CoreErrorCode::BadIndex);
}

#[test]
fn clone_at_appends_renamed_copy_and_returns_its_index() {
    let mut roster = Roster::from(vec![named("Aria"), named("Borin")]);

    let new_index = roster.clone_at(0).expect("clone at valid index");

    assert_eq!(new_index, 2);
    assert_eq!(names(&roster), vec!["Aria", "Borin", "Aria (copy)"]);

    let copy = roster.get(new_index).expect("clone exists");
    assert_eq!(copy.class, CharacterClass::Warrior);

    let err = roster.clone_at(9).expect_err("index 9 of 3");
    assert_eq!(err.code, CoreErrorCode::BadIndex);
    assert_eq!(roster.len(), 3);
}

#[test]
fn reload_replaces_contents_wholesale() {
    let mut roster = Roster::from(vec![named("Aria"), named("Borin")]);

    roster.reload(vec![named("Zed")]);
    assert_eq!(names(&roster), vec!["Zed"]);

    roster.reload(Vec::new());
    assert!(roster.is_empty());
}
