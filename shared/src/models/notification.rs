//! Navbar notifications

/// Static notification list shown in the navbar modal
pub const NAVBAR_NOTIFICATIONS: [&str; 3] = [
    "💧 Umidade baixa na plantação de milho.",
    "🌾 Colheita agendada para amanhã.",
    "📡 Sensor da estufa desconectado.",
];
