//! Chat relay server binary.
//!
//! Clients connect over WebSocket, announce an identity, join rooms and
//! exchange group/private messages and typing notifications.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;

use idobata::{
    common::{logger::setup_logger, time::SystemClock},
    domain::{PresenceRegistry, RoomDirectory},
    infrastructure::{
        auth::StoreBackedAuthService, message_pusher::WebSocketMessagePusher,
        repository::InMemoryChatStore,
    },
    ui::{Server, state::AppState},
    usecase::{
        AnnounceIdentityUseCase, ConnectSessionUseCase, DisconnectSessionUseCase, JoinRoomUseCase,
        LeaveRoomUseCase, NotifyTypingUseCase, SendGroupMessageUseCase, SendPrivateMessageUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time chat relay server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Store / clock
    // 2. Presence registry, room directory, message pusher
    // 3. UseCases
    // 4. Server

    let store = Arc::new(InMemoryChatStore::new());
    let clock = Arc::new(SystemClock);

    let presence = Arc::new(Mutex::new(PresenceRegistry::new()));
    let rooms = Arc::new(Mutex::new(RoomDirectory::new()));
    let pusher = Arc::new(WebSocketMessagePusher::new());

    let state = AppState {
        connect_session: Arc::new(ConnectSessionUseCase::new(pusher.clone())),
        announce_identity: Arc::new(AnnounceIdentityUseCase::new(presence.clone())),
        disconnect_session: Arc::new(DisconnectSessionUseCase::new(
            presence.clone(),
            rooms.clone(),
            pusher.clone(),
        )),
        join_room: Arc::new(JoinRoomUseCase::new(rooms.clone())),
        leave_room: Arc::new(LeaveRoomUseCase::new(rooms.clone())),
        send_group_message: Arc::new(SendGroupMessageUseCase::new(
            store.clone(),
            pusher.clone(),
            rooms.clone(),
            clock.clone(),
        )),
        notify_typing: Arc::new(NotifyTypingUseCase::new(pusher.clone(), rooms.clone())),
        send_private_message: Arc::new(SendPrivateMessageUseCase::new(
            store.clone(),
            pusher.clone(),
            presence.clone(),
            clock.clone(),
        )),
        auth: Arc::new(StoreBackedAuthService::new(store.clone(), clock)),
    };

    let server = Server::new(state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
