use anyhow::Result;
use apptbook_core::{AppointmentStore, Direction, SortField};

use crate::render::{render_count, render_list, Render};

pub fn run(
    mut store: AppointmentStore,
    query: Option<String>,
    sort_by: Option<SortField>,
    order: Option<Direction>,
    json: bool,
) -> Result<()> {
    if let Some(query) = query {
        store.set_query(query);
    }
    if let Some(field) = sort_by {
        store.set_sort_field(field);
    }
    if let Some(direction) = order {
        store.set_direction(direction);
    }

    let visible = store.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{}", store.state().view.render());
    println!("{}", render_list(&visible));
    println!();
    println!("{}", render_count(visible.len(), store.appointments().len()));

    Ok(())
}
