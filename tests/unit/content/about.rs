use super::*;

#[test]
fn slash_list_joins_with_spaced_slashes() {
    assert_eq!(slash_list(&["Git", "Docker"]), "Git / Docker");
    assert_eq!(slash_list(&[]), "");
    assert!(slash_list(COLLABORATION).ends_with("X / YouTube"));
}

#[test]
fn awards_credit_the_catalog_projects() {
    assert!(AWARDS.iter().any(|a| a.contains("(VOID)")));
    assert!(AWARDS.iter().any(|a| a.contains("(Flipside)")));
}
