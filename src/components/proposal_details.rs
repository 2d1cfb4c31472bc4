//! Proposal detail card: customer, vehicle, and financing attributes,
//! with the realtime chat embedded underneath.

use leptos::prelude::*;

use crate::components::proposal_chat::ProposalChat;
use crate::state::proposals::{Proposal, status_style};
use crate::util::format::{
    PLACEHOLDER, format_currency_brl, format_date, format_date_time, mask_cpf, mask_phone,
};

/// Detail view for the selected proposal.
///
/// Renders the proposal attributes and hands the proposal/dealer
/// identifiers down to [`ProposalChat`]. Shows a hint when nothing is
/// selected.
#[component]
pub fn ProposalDetails(#[prop(into)] proposal: Signal<Option<Proposal>>) -> impl IntoView {
    let proposal_id = Signal::derive(move || proposal.get().map(|p| p.id));
    let dealer_id = Signal::derive(move || proposal.get().and_then(|p| p.dealer_id));

    view! {
        <div class="proposal-details">
            {move || {
                let Some(p) = proposal.get() else {
                    return view! {
                        <p class="proposal-details__hint">
                            "Selecione uma ficha para visualizar os detalhes."
                        </p>
                    }
                        .into_any();
                };

                let style = status_style(&p.status);
                let dealer = p
                    .dealer_id
                    .map_or_else(|| PLACEHOLDER.to_owned(), |id| format!("#{id}"));
                let seller = p
                    .seller_id
                    .map_or_else(|| PLACEHOLDER.to_owned(), |id| format!("#{id}"));
                let year = p
                    .vehicle_year
                    .map_or_else(|| PLACEHOLDER.to_owned(), |y| y.to_string());

                view! {
                    <div class="proposal-details__content">
                    <div class="proposal-details__header">
                        <span class="proposal-details__id">{format!("#{}", p.id)}</span>
                        <span class=format!("badge {}", style.badge_class)>{style.label}</span>
                        <span class="proposal-details__updated">
                            {format!("Atualizado {}", format_date_time(p.updated_at.as_deref()))}
                        </span>
                    </div>

                    <div class="proposal-details__grid">
                        <section class="proposal-details__card">
                            <h3>"Cliente"</h3>
                            <p>{p.customer_name.clone()}</p>
                            <p>{format!("CPF {}", mask_cpf(p.customer_cpf.as_deref()))}</p>
                            <p>{format!("Nascimento {}", format_date(p.customer_birth_date.as_deref()))}</p>
                        </section>

                        <section class="proposal-details__card">
                            <h3>"Contato"</h3>
                            <p>
                                {p.customer_email
                                    .clone()
                                    .unwrap_or_else(|| "Sem e-mail informado".to_owned())}
                            </p>
                            <p>{mask_phone(p.customer_phone.as_deref())}</p>
                            <p>
                                {format!(
                                    "CNH {} · Cat. {}",
                                    if p.has_cnh { "Sim" } else { "Não" },
                                    p.cnh_category.clone().unwrap_or_else(|| PLACEHOLDER.to_owned()),
                                )}
                            </p>
                        </section>

                        <section class="proposal-details__card">
                            <h3>"Veículo"</h3>
                            <p>{format!("{} · {} ({year})", p.vehicle_brand, p.vehicle_model)}</p>
                            <p>
                                {format!(
                                    "Placa {}",
                                    p.vehicle_plate.clone().unwrap_or_else(|| PLACEHOLDER.to_owned()),
                                )}
                            </p>
                            <p>
                                {format!(
                                    "FIPE {} · {}",
                                    p.fipe_code.clone().unwrap_or_else(|| PLACEHOLDER.to_owned()),
                                    format_currency_brl(p.fipe_value),
                                )}
                            </p>
                        </section>

                        <section class="proposal-details__card">
                            <h3>"Valores"</h3>
                            <p>{format!("Entrada {}", format_currency_brl(p.down_payment_value))}</p>
                            <p class="proposal-details__financed">
                                {format!("{} financiado", format_currency_brl(p.financed_value))}
                            </p>
                        </section>

                        <section class="proposal-details__card">
                            <h3>"Responsáveis"</h3>
                            <p>{format!("Dealer {dealer}")}</p>
                            <p>{format!("Operador {seller}")}</p>
                        </section>

                        <section class="proposal-details__card">
                            <h3>"Bancos consultados / observações"</h3>
                            <p>
                                {p.notes
                                    .as_deref()
                                    .map(str::trim)
                                    .filter(|notes| !notes.is_empty())
                                    .map_or_else(
                                        || "Nenhum banco ou observação informado para esta proposta."
                                            .to_owned(),
                                        str::to_owned,
                                    )}
                            </p>
                        </section>
                    </div>

                    <div class="proposal-details__audit">
                        <p>{format!("Criada em {}", format_date_time(p.created_at.as_deref()))}</p>
                        <p>{format!("Atualizada em {}", format_date_time(p.updated_at.as_deref()))}</p>
                    </div>
                    </div>
                }
                    .into_any()
            }}

            <ProposalChat proposal_id=proposal_id dealer_id=dealer_id/>
        </div>
    }
}
