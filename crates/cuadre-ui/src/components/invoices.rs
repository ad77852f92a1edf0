//! Siigo invoice reconciliation: upload a file, render the matching report.
//!
//! Failures surface as the gateway's classified message; nothing here
//! retries, the user re-submits explicitly.

use crate::app::ApiCtx;
use cuadre_api_models::ReconciliationReport;
use yew::prelude::*;

#[function_component(InvoicesPage)]
pub(crate) fn invoices_page() -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let busy = use_state(|| false);
    let report = use_state(|| None as Option<ReconciliationReport>);
    let error = use_state(|| None as Option<String>);

    let on_file_change = {
        let api = api.clone();
        let busy = busy.clone();
        let report = report.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let client = api.client.clone();
            let busy = busy.clone();
            let report = report.clone();
            let error = error.clone();
            busy.set(true);
            error.set(None);
            yew::platform::spawn_local(async move {
                match client.upload_reconciliation(&file).await {
                    Ok(outcome) => {
                        report.set(Some(outcome));
                    }
                    Err(err) => {
                        report.set(None);
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="invoices">
            <section class="card">
                <h2>{"Conciliación Siigo"}</h2>
                <p class="muted">{"Suba el archivo de facturas para cruzarlo contra Siigo."}</p>
                <label class="stack">
                    <span>{"Archivo de facturas"}</span>
                    <input
                        type="file"
                        accept=".csv,.xlsx"
                        disabled={*busy}
                        onchange={on_file_change}
                    />
                </label>
                {if *busy {
                    html! { <p class="muted">{"Procesando…"}</p> }
                } else {
                    html! {}
                }}
                {if let Some(err) = &*error {
                    html! { <p class="error-text">{err}</p> }
                } else {
                    html! {}
                }}
            </section>
            {if let Some(report) = &*report {
                report_view(report)
            } else {
                html! {}
            }}
        </div>
    }
}

fn report_view(report: &ReconciliationReport) -> Html {
    html! {
        <section class="card">
            <h3>{"Resultado"}</h3>
            <p class="muted">
                {format!(
                    "{} procesadas · {} conciliadas · {} pendientes",
                    report.processed, report.matched, report.unmatched
                )}
            </p>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Factura"}</th>
                        <th>{"Documento Siigo"}</th>
                        <th>{"Total"}</th>
                        <th>{"Estado"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for report.rows.iter().map(|row| html! {
                        <tr>
                            <td>{&row.invoice_number}</td>
                            <td>{row.siigo_id.clone().unwrap_or_else(|| "—".to_string())}</td>
                            <td>{format!("{:.2}", row.total)}</td>
                            <td>{&row.status}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </section>
    }
}
