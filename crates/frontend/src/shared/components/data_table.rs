//! Generic server-paginated table.
//!
//! Sorting, selection and row actions are reported upward; the table itself
//! only renders what it is given.

use contracts::domain::common::Entity;
use contracts::shared::list::SortState;
use leptos::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use thaw::*;

use super::column::{truncate_text, Cell, ColumnDef};
use super::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use super::ui::ToneBadge;

/// Renders the trailing actions cell of a row.
pub type RowRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

pub const EMPTY_MESSAGE: &str = "No results";

fn render_cell(cell: Cell, truncate: Option<usize>) -> AnyView {
    match cell {
        Cell::Badge { label, tone } => view! { <ToneBadge tone=tone label=label /> }.into_any(),
        other => {
            let text = other.display_text();
            match truncate.map(|max| truncate_text(&text, max)) {
                Some((shown, Some(full))) => view! { <span title=full>{shown}</span> }.into_any(),
                _ => view! { <span>{text}</span> }.into_any(),
            }
        }
    }
}

/// Span of the "No results" row: checkbox + data columns + actions.
fn empty_row_colspan(columns: usize, has_actions: bool) -> String {
    (columns + 1 + usize::from(has_actions)).to_string()
}

#[component]
pub fn DataTable<T>(
    columns: Vec<ColumnDef<T>>,
    #[prop(into)] items: Signal<Vec<T>>,
    #[prop(into)] sort: Signal<Option<SortState>>,
    on_sort: Callback<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] selected: Signal<BTreeSet<String>>,
    on_select: Callback<(String, bool)>,
    on_select_all: Callback<bool>,
    #[prop(optional)] row_actions: Option<RowRenderer<T>>,
    #[prop(optional)] on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: Entity,
{
    let has_actions = row_actions.is_some();
    let colspan = empty_row_colspan(columns.len(), has_actions);
    let columns = StoredValue::new(columns);
    let row_actions = StoredValue::new(row_actions);

    let keys = Signal::derive(move || items.with(|rows| rows.iter().map(|r| r.record_key()).collect()));

    view! {
        <div class="table-wrapper" class:table-wrapper--loading=move || loading.get()>
            <Show when=move || loading.get()>
                <div class="table-wrapper__spinner">
                    <Spinner />
                </div>
            </Show>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox keys=keys selected=selected on_change=on_select_all />
                        {columns
                            .get_value()
                            .into_iter()
                            .map(|column| match column.sort_field {
                                Some(field) => view! {
                                    <SortableHeaderCell
                                        label=column.label
                                        sort_field=field
                                        sort=sort
                                        on_sort=on_sort
                                        style=column.width.style()
                                    />
                                }
                                .into_any(),
                                None => view! {
                                    <TableHeaderCell resizable=false attr:style=column.width.style()>
                                        {column.label}
                                    </TableHeaderCell>
                                }
                                .into_any(),
                            })
                            .collect_view()}
                        {has_actions.then(|| view! {
                            <TableHeaderCell resizable=false class="table__header-cell--actions">
                                ""
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let colspan = colspan.clone();
                        let rows = items.get();
                        if rows.is_empty() {
                            let message = if loading.get() { "Loading..." } else { EMPTY_MESSAGE };
                            return view! {
                                <TableRow>
                                    <td class="table__cell table__cell--empty" colspan=colspan>
                                        {message}
                                    </td>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let key = row.record_key();
                                let actions_cell = row_actions.with_value(|render| {
                                    render.as_ref().map(|render| {
                                        let rendered = render(&row);
                                        view! {
                                            <TableCell class="table__cell--actions">
                                                {rendered}
                                            </TableCell>
                                        }
                                    })
                                });
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|column| {
                                            let cell = column.cell(&row);
                                            let class = if cell.is_numeric() {
                                                "table__cell--number"
                                            } else {
                                                ""
                                            };
                                            let truncated = column.truncate.is_some();
                                            let rendered = render_cell(cell, column.truncate);
                                            view! {
                                                <TableCell class=class>
                                                    <TableCellLayout truncate=truncated>
                                                        {rendered}
                                                    </TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()
                                });
                                view! {
                                    <TableRow
                                        class="table__row"
                                        on:click=move |_| {
                                            if let Some(cb) = on_row_click {
                                                cb.run(row.clone());
                                            }
                                        }
                                    >
                                        <TableCellCheckbox
                                            item_key=key
                                            selected=selected
                                            on_change=on_select
                                        />
                                        {cells}
                                        {actions_cell}
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row_spans_whole_table() {
        assert_eq!(empty_row_colspan(4, true), "6");
        assert_eq!(empty_row_colspan(4, false), "5");
        assert_eq!(empty_row_colspan(0, false), "1");
    }
}
