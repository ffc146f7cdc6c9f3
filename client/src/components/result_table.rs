//! Tabular rendering of a query result.

use leptos::prelude::*;

use crate::net::types::QueryResult;
use crate::util::format;

#[component]
pub fn ResultTable(result: QueryResult) -> impl IntoView {
    let summary = format!("{} rows in {}", result.rows.len(), format::duration(result.duration_ms));
    let header = result
        .columns
        .into_iter()
        .map(|column| view! { <th>{column}</th> })
        .collect_view();
    let body = result
        .rows
        .into_iter()
        .map(|row| {
            let cells = row.iter().map(|value| view! { <td>{format::cell(value)}</td> }).collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="result-table">
            <p class="result-table__summary">{summary}</p>
            <table>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
