//! Save/server identity for memory banks.
//!
//! Each save or server the player connects to gets its own memory bank.
//! The bank key is derived from an explicit [`ConnectionInfo`] value the
//! host constructs while connected; nothing in here reads global client
//! state.

use serde::{Deserialize, Serialize};

/// Description of the connection the client currently has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionInfo {
    /// A local singleplayer world (LAN publishing by the host included).
    Singleplayer {
        /// Save directory name of the level.
        level_id: String,
        /// User-facing level name.
        level_name: String,
    },
    /// A world another player published to LAN.
    Lan {
        /// Host address, possibly including a port.
        host_address: String,
        /// Name of the hosting player, when known.
        host_player: Option<String>,
    },
    /// A dedicated multiplayer server.
    Dedicated {
        /// Server address as entered in the server list.
        address: String,
        /// Server list entry name.
        name: String,
    },
    /// A hosted realm. Identity comes from the numeric realm id since
    /// realm names can change.
    Realm {
        /// Stable realm identifier.
        realm_id: i64,
        /// User-facing realm name.
        realm_name: String,
    },
}

/// Which save/server a memory bank belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionContext {
    /// Stable bank identifier, safe to use as a path component.
    pub id: String,
    /// User-facing description of the session.
    pub display_name: String,
}

impl SessionContext {
    /// Derive the bank identity for a connection.
    pub fn derive(info: &ConnectionInfo) -> SessionContext {
        match info {
            ConnectionInfo::Singleplayer {
                level_id,
                level_name,
            } => SessionContext {
                id: format!("singleplayer/{}", sanitize_for_path(level_id)),
                display_name: format!("Singleplayer: {level_name}"),
            },
            ConnectionInfo::Lan {
                host_address,
                host_player,
            } => {
                // The LAN port changes between publishes; the host ip
                // usually does not.
                let address = strip_port(host_address);
                let label = host_player.as_deref().unwrap_or(address);
                SessionContext {
                    id: format!("lan/{}", sanitize_for_path(address)),
                    display_name: format!("LAN: {label}"),
                }
            }
            ConnectionInfo::Dedicated { address, name } => SessionContext {
                id: format!("multiplayer/{}", sanitize_for_path(address)),
                display_name: format!("Multiplayer: {name}"),
            },
            ConnectionInfo::Realm {
                realm_id,
                realm_name,
            } => SessionContext {
                id: format!("realms/{:016x}", realm_id),
                display_name: format!("Realm: {realm_name}"),
            },
        }
    }
}

/// Reduce a free-form name to a lowercase path-safe component.
///
/// Characters outside `a-z0-9_.-` become underscores.
pub fn sanitize_for_path(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let c = c.to_ascii_lowercase();
        if matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.') {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

fn strip_port(address: &str) -> &str {
    match address.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => address,
    }
}
