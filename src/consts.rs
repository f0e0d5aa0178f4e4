//! Project-wide constants.

/// Initial JVM heap handed to the solver at launch.
pub const INITIAL_HEAP_FLAG: &str = "-Xms512m";

/// Maximum JVM heap handed to the solver at launch.
pub const MAX_HEAP_FLAG: &str = "-Xmx2048m";

/// Per-thread stack size handed to the solver at launch.
pub const THREAD_STACK_FLAG: &str = "-Xss4m";

/// Default JVM binary, resolved through `PATH`.
pub const DEFAULT_JAVA_BIN: &str = "java";

/// Default solver jar, relative to the working directory.
pub const DEFAULT_SOLVER_JAR: &str = "launcher.jar";

/// Name of the staged instance file inside its staging directory.
pub const STAGED_FILE_NAME: &str = "instance.data";
