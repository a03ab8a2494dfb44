use super::*;

#[test]
fn visitors_see_no_links() {
    assert!(nav_items(None).is_empty());
    assert!(nav_items(Some(AccessLevel::Visitor)).is_empty());
}

#[test]
fn editors_see_inventory_links_without_users() {
    let items = nav_items(Some(AccessLevel::Editor));
    assert_eq!(items.first(), Some(&NavItem::AddChemical));
    assert!(items.contains(&NavItem::ManageDatabase));
    assert!(items.contains(&NavItem::MsdsLog));
    assert!(!items.contains(&NavItem::ManageUsers));
}

#[test]
fn full_access_adds_manage_users() {
    let items = nav_items(Some(AccessLevel::FullAccess));
    assert_eq!(items.last(), Some(&NavItem::ManageUsers));
    assert_eq!(items.len(), 7);
}

#[test]
fn menu_links_map_to_dialogs() {
    assert_eq!(NavItem::Inventory.modal(), Some(Modal::InventoryAudit));
    assert_eq!(NavItem::MsdsLog.modal(), None);
    assert_eq!(DATABASE_MENU[2].0, "Sub Location List");
}

#[test]
fn dialog_gates() {
    assert!(may_open(Modal::Chemical(1), None));
    assert!(!may_open(Modal::AddChemical, Some(AccessLevel::Visitor)));
    assert!(may_open(Modal::AddChemical, Some(AccessLevel::Editor)));
    assert!(!may_open(Modal::ManageUsers, Some(AccessLevel::Editor)));
    assert!(may_open(Modal::ManageUsers, Some(AccessLevel::FullAccess)));
}
