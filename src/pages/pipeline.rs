//! Proposal pipeline page: the dealer's proposal list with selection and
//! the detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the portal's landing route. It loads the pipeline over REST
//! once on mount and coordinates the select -> detail -> chat flow.

use leptos::prelude::*;

use crate::components::proposal_details::ProposalDetails;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::proposals::{ProposalsState, status_style};
use crate::util::format::format_currency_brl;

/// Pipeline page — proposal list on the left, detail + chat on the right.
#[component]
pub fn PipelinePage() -> impl IntoView {
    let proposals = expect_context::<RwSignal<ProposalsState>>();

    #[cfg(feature = "hydrate")]
    {
        proposals.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_proposals().await {
                Some(items) => proposals.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                None => proposals.update(|s| {
                    s.loading = false;
                    s.error = Some("Não foi possível carregar as propostas.".to_owned());
                }),
            }
        });
    }

    let selected = Signal::derive(move || proposals.get().selected().cloned());

    view! {
        <div class="pipeline">
            <div class="pipeline__list">
                <h2 class="pipeline__title">"Esteira de propostas"</h2>
                {move || {
                    let state = proposals.get();
                    if state.loading {
                        return view! { <p class="pipeline__loading">"Carregando..."</p> }.into_any();
                    }
                    if let Some(error) = state.error {
                        return view! { <p class="pipeline__error">{error}</p> }.into_any();
                    }
                    if state.items.is_empty() {
                        return view! {
                            <p class="pipeline__empty">"Nenhuma proposta na esteira."</p>
                        }
                            .into_any();
                    }

                    state
                        .items
                        .iter()
                        .map(|proposal| {
                            let id = proposal.id;
                            let is_selected = state.selected_id == Some(id);
                            let style = status_style(&proposal.status);
                            let row_class = if is_selected {
                                "pipeline__row pipeline__row--selected"
                            } else {
                                "pipeline__row"
                            };
                            let customer = proposal.customer_name.clone();
                            let financed = format_currency_brl(proposal.financed_value);
                            view! {
                                <button
                                    class=row_class
                                    on:click=move |_| proposals.update(|s| s.selected_id = Some(id))
                                >
                                    <span class="pipeline__row-id">{format!("#{id}")}</span>
                                    <span class="pipeline__row-customer">{customer}</span>
                                    <span class="pipeline__row-financed">{financed}</span>
                                    <span class=format!("badge {}", style.badge_class)>
                                        {style.label}
                                    </span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="pipeline__detail">
                <ProposalDetails proposal=selected/>
            </div>
        </div>
    }
}
