use canteen::lifecycle::Canteen;
use canteen::model::{Availability, DishId, OrderId};
use canteen::persistence::{DataFile, Hydration};
use canteen::shell::{Exit, Shell, BANNER, FAREWELL};
use tempfile::TempDir;

/// Runs `script` against `canteen` and returns how it ended plus everything printed.
fn run_script(canteen: &mut Canteen, script: &str) -> (Exit, String) {
    let mut shell = Shell::new(script.as_bytes(), Vec::new());
    let exit = shell.run(canteen).expect("Shell failed");
    let output = String::from_utf8(shell.into_output()).expect("Output is not UTF-8");
    (exit, output)
}

#[test]
fn test_session_saves_and_reloads() {
    let dir = TempDir::new().unwrap();
    let file = DataFile::new(dir.path().join("data.json"));
    let (mut canteen, _) = Canteen::open(file.clone()).unwrap();

    let script = "\
1\nSoup\n5\nyes\n\
1\nBread\n2\nno\n\
5\nAlice\n1,2\n\
5\nAlice\n1\n\
6\n1\npreparing\n\
9\n";
    let (exit, output) = run_script(&mut canteen, script);

    assert_eq!(exit, Exit::Saved);
    assert!(output.contains(BANNER));
    assert!(output.contains("Added 'Soup' to the menu with dish ID 1."));
    assert!(output.contains("Added 'Bread' to the menu with dish ID 2."));
    assert!(output.contains("Dish with ID 2 is not available."));
    assert!(output.contains("Order received. Order ID: 1"));
    assert!(output.contains("Updated status of order with ID 1 to 'preparing'."));
    assert!(output.contains("Data saved successfully."));
    assert!(output.trim_end().ends_with(FAREWELL));

    let (restored, hydration) = Canteen::open(file).unwrap();
    assert_eq!(hydration, Hydration::Restored);
    assert_eq!(restored.menu.len(), 2);
    assert_eq!(restored.orders.len(), 1);
    assert_eq!(restored.orders.get(OrderId(1)).unwrap().status, "preparing");
}

#[test]
fn test_end_of_input_does_not_save() {
    let dir = TempDir::new().unwrap();
    let file = DataFile::new(dir.path().join("data.json"));
    let mut canteen = Canteen::new(file.clone());

    let (exit, output) = run_script(&mut canteen, "1\nSoup\n5\n");

    assert_eq!(exit, Exit::EndOfInput);
    assert!(!output.contains("Data saved successfully."));
    assert!(canteen.menu.is_empty());
    assert!(!file.path().exists());
}

#[test]
fn test_invalid_fields_abort_the_action() {
    let mut canteen = Canteen::new(DataFile::new("unused.json"));
    let script = "\
0\n\
abc\n\
1\n   \n\
1\nSoup\nfree\n\
1\nSoup\n-1\n\
1\nSoup\n5\nmaybe\n\
2\nx\n\
2\n7\n";
    let (exit, output) = run_script(&mut canteen, script);

    assert_eq!(exit, Exit::EndOfInput);
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert!(output.contains("Dish name cannot be empty."));
    assert!(output.contains("Invalid price 'free'."));
    assert!(output.contains("Invalid price '-1'."));
    assert!(output.contains("Invalid ID 'x'."));
    assert!(output.contains("No dish found with ID 7."));
    assert!(canteen.menu.is_empty());
}

#[test]
fn test_display_menu_lists_only_available_dishes() {
    let mut canteen = Canteen::new(DataFile::new("unused.json"));
    let (_, output) = run_script(&mut canteen, "4\n");
    assert!(output.contains("No available dishes in the menu."));

    canteen.menu.add_dish("Soup", 5.0, Availability::Yes).unwrap();
    canteen.menu.add_dish("Bread", 2.0, Availability::No).unwrap();
    let (_, output) = run_script(&mut canteen, "3\n1\nno\n3\n2\nyes\n4\n");

    assert!(output.contains("Updated availability of dish with ID 1 to 'no'."));
    assert!(output.contains("Updated availability of dish with ID 2 to 'yes'."));
    assert!(output.contains("Bread"));
    assert!(output.contains("2.00"));
    assert!(!output.contains("5.00"));
    assert_eq!(
        canteen.menu.get(DishId(1)).unwrap().availability,
        Availability::No
    );
}

#[test]
fn test_order_listings() {
    let mut canteen = Canteen::new(DataFile::new("unused.json"));
    let (_, output) = run_script(&mut canteen, "7\n");
    assert!(output.contains("No orders found."));

    canteen.menu.add_dish("Soup", 5.0, Availability::Yes).unwrap();
    canteen.menu.add_dish("Tea", 1.5, Availability::Yes).unwrap();
    canteen
        .take_order("Alice", vec![DishId(1), DishId(2)])
        .unwrap();

    let (_, output) = run_script(&mut canteen, "7\n8\nserved\n8\n\n8\nreceived\n");
    assert!(output.contains("Alice"));
    assert!(output.contains("Soup, Tea"));
    assert!(output.contains("6.50"));
    assert!(output.contains("No orders found with status 'served'."));
    // A blank filter is an exact match too
    assert!(output.contains("No orders found with status ''."));
    // Listed once by action 7 and once by the `received` filter
    assert_eq!(output.matches("Soup, Tea").count(), 2);
}
