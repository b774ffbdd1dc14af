//! # taskforge
//!
//! A small plan-execute-summarize orchestrator for pluggable worker agents.
//!
//! ```text
//!            ┌────────────────────────────┐
//!            │        Orchestrator        │
//!            │  plan → dispatch → summary │
//!            └──────┬──────────┬──────────┘
//!                   │          │
//!          ┌────────▼───┐  ┌───▼────────┐
//!          │   Agents   │  │   Memory   │
//!          │ research / │  │ episodes + │
//!          │ code/comms │  │   facts    │
//!          └─┬────────┬─┘  └────────────┘
//!            │        │
//!    ┌───────▼──┐  ┌──▼─────────┐
//!    │  Tools   │  │ ChatClient │
//!    │ registry │  │ (swappable)│
//!    └──────────┘  └────────────┘
//! ```
//!
//! ## Task Flow
//! 1. Caller constructs a [`task::Task`] with a user id and an objective
//! 2. [`orchestrator::Orchestrator::handle_task`] asks the model for a plan
//! 3. Each step is dispatched to its agent, gated by the safety hook
//! 4. Step outcomes are logged, timed, and stored as memory episodes
//! 5. A final answer is synthesized from the full plan, success or not
//!
//! ## Modules
//! - `orchestrator`: the sequential step loop and plan decoding
//! - `agents`: the worker roster (research, code, comms)
//! - `tools`: named callables agents invoke with JSON arguments
//! - `memory`: per-user episode store plus a flat fact store
//! - `llm`: the swappable chat interface and the shipped stub client
//! - `safety`: pre-step gate and post-step result filter
//! - `task`: the `Task`/`Step` data model

pub mod agents;
pub mod config;
pub mod llm;
pub mod memory;
pub mod orchestrator;
pub mod safety;
pub mod task;
pub mod tools;
pub mod util;

pub use agents::{Agent, AgentKind, AgentRoster};
pub use config::OrchestratorConfig;
pub use llm::{ChatClient, StubChatClient};
pub use memory::MemoryLayer;
pub use orchestrator::Orchestrator;
pub use safety::{PolicySafety, SafetyHook};
pub use task::{Step, StepStatus, Task, TaskStatus};
pub use tools::{Tool, ToolError, ToolRegistry};
