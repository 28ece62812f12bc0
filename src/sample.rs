use crate::config::MenuConfig;
use crate::model::{Badge, Entry};
use crate::viewmodel::{ListEvent, MenuEvent, MenuList, MenuViewModel};

/// Label of the demo row that removes itself when activated
pub const DISMISS_LABEL: &str = "Dismiss this row";

const LOCATIONS: [&str; 12] = [
    "Airport", "Beach", "Canal", "Docks", "Farm", "Harbor",
    "Lighthouse", "Mall", "Observatory", "Quarry", "Stadium", "Tunnel",
];

fn player_menu(capacity: usize) -> MenuList {
    let mut list = MenuList::new(capacity);
    list.insert(Entry::toggle("God mode", false).with_description("Player takes no damage"));
    list.insert(Entry::toggle("Infinite stamina", false));
    if let Some(wanted) = Entry::cycle("Wanted level", ["0", "1", "2", "3", "4", "5"]) {
        list.insert(wanted.with_description("Police attention"));
    }
    list.insert(Entry::plain("Heal").with_left_badge(Badge::Tick));
    list
}

fn vehicle_menu(capacity: usize) -> MenuList {
    MenuList::with_entries(
        capacity,
        (1..=40).map(|i| {
            let entry = Entry::plain(format!("Vehicle #{:02}", i));
            if i % 10 == 0 {
                entry.with_right_badge(Badge::Star)
            } else {
                entry
            }
        }),
    )
}

/// Demo menu sized from `config`
pub fn build(config: &MenuConfig) -> MenuViewModel {
    let mut root = MenuList::new(config.top_capacity);
    root.insert(Entry::nested("Player", player_menu(config.nested_capacity)));
    root.insert(
        Entry::nested("Vehicles", vehicle_menu(config.nested_capacity))
            .with_description("Spawn a vehicle next to the player"),
    );
    if let Some(weather) = Entry::cycle("Weather", ["Clear", "Cloudy", "Rain", "Thunder", "Snow"]) {
        root.insert(weather);
    }
    if let Some(time) = Entry::cycle("Time of day", ["Morning", "Noon", "Evening", "Night"]) {
        root.insert(time);
    }
    for location in LOCATIONS {
        root.insert(Entry::plain(format!("Teleport: {}", location)));
    }
    root.insert(
        Entry::plain(DISMISS_LABEL)
            .with_left_badge(Badge::Warning)
            .with_description("Activating this row removes it from the menu"),
    );
    root.insert(
        Entry::plain("Debug overlay")
            .with_left_badge(Badge::Lock)
            .with_right_label("locked"),
    );
    root.refresh();
    MenuViewModel::new("Trainer", root)
}

/// Demo listener: removes the dismiss row when it is activated
pub fn dismiss_on_activate(event: &MenuEvent, list: &mut MenuList) {
    let ListEvent::EntryActivated { index } = event.event else {
        return;
    };
    if list.entry(index).is_some_and(|e| e.label == DISMISS_LABEL) {
        if let Err(err) = list.remove_at(index) {
            tracing::warn!(%err, "dismiss failed");
        }
    }
}
