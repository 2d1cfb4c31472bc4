//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::channel_client::ChannelSender;
use crate::pages::pipeline::PipelinePage;
use crate::state::chat::{ChatIdentity, ChatState};
use crate::state::proposals::ProposalsState;

/// Identity the dealer portal publishes chat messages under.
const PORTAL_IDENTITY: &str = "logista";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, spawns the realtime channel client
/// in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let proposals = RwSignal::new(ProposalsState::default());
    let sender = RwSignal::new(ChannelSender::default());

    provide_context(chat);
    provide_context(proposals);
    provide_context(sender);
    provide_context(ChatIdentity(PORTAL_IDENTITY.to_owned()));

    #[cfg(feature = "hydrate")]
    {
        use crate::net::channel_client::{ChannelConfig, realtime_url_from_location, spawn_channel_client};
        use crate::net::types::CHAT_CHANNEL;

        let config = ChannelConfig::new(CHAT_CHANNEL, PORTAL_IDENTITY, &realtime_url_from_location())
            .with_origin("dealer-panel");
        sender.set(spawn_channel_client(config, chat));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/dealer-portal.css"/>
        <Title text="Portal do Lojista"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=PipelinePage/>
            </Routes>
        </Router>
    }
}
