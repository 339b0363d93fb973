#[derive(Debug, Clone)]
pub enum Message {
    // === SERVER MESSAGES ===
    ServerStarted(u16),
    ServerBindFailed(String),
    ConnectionFailed(String),

    // === TARGET CONFIGURATION MESSAGES ===
    TargetConfigured(String), // formatted target instant
    TargetMissing,
    TargetInvalid(String), // raw environment value

    // === COUNTDOWN MESSAGES ===
    CountdownHeader(String), // formatted target instant
}
