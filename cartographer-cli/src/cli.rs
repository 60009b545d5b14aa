use crate::params::{Params, LEGACY_JSON, LEGACY_URLS};
use structopt::StructOpt;

pub fn parse_args() -> Args {
    Args::from_args()
}

#[derive(Debug, StructOpt)]
#[structopt(name = "cartographer", about = "Cartographer command line client")]
pub struct Args {
    /// The configuration profile to use
    #[structopt(short = "p", long)]
    pub profile: Option<String>,
    /// The username or email address to authenticate with
    #[structopt(short = "U", long, alias = "username")]
    pub email: Option<String>,
    /// The password to authenticate with
    #[structopt(short = "P", long)]
    pub password: Option<String>,
    /// Bearer token to send instead of email and password
    #[structopt(short = "T", long)]
    pub token: Option<String>,
    /// The URL scheme to use
    #[structopt(long)]
    pub scheme: Option<String>,
    /// The server hostname
    #[structopt(long)]
    pub host: Option<String>,
    /// Use legacy URLs and headers (for older server versions)
    #[structopt(long)]
    pub legacy_urls: bool,
    /// Ask for old-style survey JSON unless --format says otherwise
    #[structopt(long)]
    pub legacy_json: bool,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Commands related to workspaces
    Workspace(WorkspaceCommand),
    /// Commands related to module data
    Module(ModuleCommand),
    /// Commands related to survey data
    Survey(SurveyCommand),
    /// Commands related to user data
    User(UserCommand),
    /// Commands related to map layer metadata
    Layer(LayerCommand),
    /// Commands related to feature data
    Feature(FeatureCommand),
    /// Commands related to attached files
    Attachment(AttachmentCommand),
    /// Commands related to uploaded files
    Upload(UploadCommand),
    /// Commands related to authentication
    Auth(AuthCommand),
    /// Get server version
    Version,
}

#[derive(Debug, StructOpt)]
pub enum WorkspaceCommand {
    /// Search the workspaces on the API server
    Search,
    /// Read data on a specific workspace
    Read {
        /// The ID or subdomain of the workspace to read
        workspace: String,
    },
}

#[derive(Debug, StructOpt)]
pub enum ModuleCommand {
    /// Search modules in a particular workspace
    Search {
        #[structopt(flatten)]
        scope: Scope,
    },
    /// Read data on a specific module
    Read {
        /// The ID of the module to read
        id: String,
    },
}

#[derive(Debug, StructOpt)]
pub enum SurveyCommand {
    /// Search surveys in a particular workspace/module
    Search {
        /// The module to search
        module: String,
        #[structopt(flatten)]
        search: SurveySearch,
    },
    /// Search survey summaries in a particular workspace/module
    Summaries {
        /// The module to search
        module: String,
        #[structopt(flatten)]
        search: SurveySearch,
    },
    /// Fetch an empty survey for a module
    Blank {
        /// The survey module
        module: String,
        #[structopt(flatten)]
        scope: Scope,
        #[structopt(flatten)]
        format: Format,
    },
    /// Read data on a specific survey
    Read {
        /// The survey module
        module: String,
        /// The ID of the survey to read
        id: String,
        #[structopt(flatten)]
        format: Format,
    },
}

#[derive(Debug, StructOpt)]
pub enum UserCommand {
    /// Search users in a particular workspace
    Search {
        #[structopt(flatten)]
        scope: Scope,
        /// Search string
        #[structopt(short = "q", long)]
        query: Option<String>,
        /// Search for users with a particular role
        #[structopt(short = "r", long)]
        role: Option<String>,
        #[structopt(flatten)]
        page: Page,
    },
    /// Read data on a specific user
    Read {
        /// Workspace name, or "*" to search all workspaces
        #[structopt(short = "w", long, default_value = "*")]
        workspace: String,
        /// The ID of the user to read
        id: String,
    },
}

#[derive(Debug, StructOpt)]
pub enum LayerCommand {
    /// Search map layers in a particular workspace
    Search {
        #[structopt(flatten)]
        scope: Scope,
    },
    /// Read metadata on a specific map layer
    Read {
        /// The layer ID
        layer: String,
        #[structopt(flatten)]
        scope: Scope,
    },
    /// Reset map layer(s)
    Reset {
        /// The layer ID (all layers when omitted)
        layer: Option<String>,
        #[structopt(flatten)]
        scope: Scope,
    },
}

#[derive(Debug, StructOpt)]
pub enum FeatureCommand {
    /// Search features in a particular layer
    Search {
        /// The layer to search
        layer: String,
        #[structopt(flatten)]
        scope: Scope,
        /// Simplify geometry
        #[structopt(short = "s", long)]
        simplify: bool,
    },
    /// Fetch a vector tile for a layer
    Tile {
        /// The layer to render
        layer: String,
        /// Zoom level
        z: u32,
        /// Tile column
        x: u32,
        /// Tile row
        y: u32,
        #[structopt(flatten)]
        scope: Scope,
    },
    /// Reset (recalculate) feature data
    Reset {
        /// The layer to reset
        #[structopt(short = "l", long)]
        layer: Option<String>,
    },
}

#[derive(Debug, StructOpt)]
pub enum AttachmentCommand {
    /// Search attachments in a particular survey
    Search {
        /// The survey module
        module: String,
        /// The survey
        survey: String,
        /// Optional folder to search
        #[structopt(short = "f", long)]
        folder: Option<String>,
    },
}

#[derive(Debug, StructOpt)]
pub enum UploadCommand {
    /// Search uploads in a particular survey
    Search {
        /// The survey module
        module: String,
        /// The survey
        survey: String,
        /// Optional subfolder to search
        #[structopt(short = "s", long)]
        subfolder: Option<String>,
    },
}

#[derive(Debug, StructOpt)]
pub enum AuthCommand {
    /// Log in with email and password
    Login,
}

#[derive(Debug, StructOpt)]
pub struct Scope {
    /// Workspace ID or subdomain
    #[structopt(short = "w", long)]
    pub workspace: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct Page {
    /// Result order
    #[structopt(short = "o", long)]
    pub order: Option<String>,
    /// Skip the first N results
    #[structopt(long)]
    pub skip: Option<u64>,
    /// Fetch the first N results (after skip count)
    #[structopt(long)]
    pub limit: Option<u64>,
}

#[derive(Debug, StructOpt)]
pub struct Format {
    /// Set to "legacy" to receive old-style survey JSON
    #[structopt(long)]
    pub format: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct SurveySearch {
    #[structopt(flatten)]
    pub scope: Scope,
    /// Search string
    #[structopt(short = "q", long)]
    pub query: Option<String>,
    #[structopt(flatten)]
    pub page: Page,
    #[structopt(flatten)]
    pub format: Format,
}

impl Scope {
    fn apply(self, params: &mut Params) {
        params.set_opt("workspace", self.workspace);
    }
}

impl Page {
    fn apply(self, params: &mut Params) {
        params.set_opt("order", self.order);
        params.set_opt("skip", self.skip);
        params.set_opt("limit", self.limit);
    }
}

impl Format {
    fn apply(self, params: &mut Params) {
        params.set_opt("format", self.format);
    }
}

impl SurveySearch {
    fn apply(self, params: &mut Params) {
        self.scope.apply(params);
        params.set_opt("query", self.query);
        self.page.apply(params);
        self.format.apply(params);
    }
}

impl Args {
    /// Flattens the parsed command line into the parameter mapping handlers read.
    /// Options that were not given are left out so the profile can fill them.
    pub fn into_params(self) -> Params {
        let mut params = Params::new();

        params.set_opt("email", self.email);
        params.set_opt("password", self.password);
        params.set_opt("token", self.token);
        params.set_opt("scheme", self.scheme);
        params.set_opt("host", self.host);
        params.set(LEGACY_URLS, self.legacy_urls);
        params.set(LEGACY_JSON, self.legacy_json);

        let (command, subcommand) = self.command.apply(&mut params);
        params.set("command", command);
        params.set_opt("subcommand", subcommand);

        params
    }
}

impl Command {
    fn apply(self, params: &mut Params) -> (&'static str, Option<&'static str>) {
        match self {
            Command::Workspace(cmd) => ("workspace", Some(cmd.apply(params))),
            Command::Module(cmd) => ("module", Some(cmd.apply(params))),
            Command::Survey(cmd) => ("survey", Some(cmd.apply(params))),
            Command::User(cmd) => ("user", Some(cmd.apply(params))),
            Command::Layer(cmd) => ("layer", Some(cmd.apply(params))),
            Command::Feature(cmd) => ("feature", Some(cmd.apply(params))),
            Command::Attachment(cmd) => ("attachment", Some(cmd.apply(params))),
            Command::Upload(cmd) => ("upload", Some(cmd.apply(params))),
            Command::Auth(cmd) => ("auth", Some(cmd.apply(params))),
            Command::Version => ("version", None),
        }
    }
}

impl WorkspaceCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            WorkspaceCommand::Search => "search",
            WorkspaceCommand::Read { workspace } => {
                params.set("workspace", workspace);
                "read"
            }
        }
    }
}

impl ModuleCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            ModuleCommand::Search { scope } => {
                scope.apply(params);
                "search"
            }
            ModuleCommand::Read { id } => {
                params.set("id", id);
                "read"
            }
        }
    }
}

impl SurveyCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            SurveyCommand::Search { module, search } => {
                params.set("module", module);
                search.apply(params);
                "search"
            }
            SurveyCommand::Summaries { module, search } => {
                params.set("module", module);
                search.apply(params);
                "summaries"
            }
            SurveyCommand::Blank {
                module,
                scope,
                format,
            } => {
                params.set("module", module);
                scope.apply(params);
                format.apply(params);
                "blank"
            }
            SurveyCommand::Read { module, id, format } => {
                params.set("module", module);
                params.set("id", id);
                format.apply(params);
                "read"
            }
        }
    }
}

impl UserCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            UserCommand::Search {
                scope,
                query,
                role,
                page,
            } => {
                scope.apply(params);
                params.set_opt("query", query);
                params.set_opt("role", role);
                page.apply(params);
                "search"
            }
            UserCommand::Read { workspace, id } => {
                params.set("workspace", workspace);
                params.set("id", id);
                "read"
            }
        }
    }
}

impl LayerCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            LayerCommand::Search { scope } => {
                scope.apply(params);
                "search"
            }
            LayerCommand::Read { layer, scope } => {
                params.set("layer", layer);
                scope.apply(params);
                "read"
            }
            LayerCommand::Reset { layer, scope } => {
                params.set_opt("layer", layer);
                scope.apply(params);
                "reset"
            }
        }
    }
}

impl FeatureCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            FeatureCommand::Search {
                layer,
                scope,
                simplify,
            } => {
                params.set("layer", layer);
                scope.apply(params);
                params.set("simplify", simplify);
                "search"
            }
            FeatureCommand::Tile {
                layer,
                z,
                x,
                y,
                scope,
            } => {
                params.set("layer", layer);
                params.set("z", z);
                params.set("x", x);
                params.set("y", y);
                scope.apply(params);
                "tile"
            }
            FeatureCommand::Reset { layer } => {
                params.set_opt("layer", layer);
                "reset"
            }
        }
    }
}

impl AttachmentCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            AttachmentCommand::Search {
                module,
                survey,
                folder,
            } => {
                params.set("module", module);
                params.set("survey", survey);
                params.set_opt("folder", folder);
                "search"
            }
        }
    }
}

impl UploadCommand {
    fn apply(self, params: &mut Params) -> &'static str {
        match self {
            UploadCommand::Search {
                module,
                survey,
                subfolder,
            } => {
                params.set("module", module);
                params.set("survey", survey);
                params.set_opt("subfolder", subfolder);
                "search"
            }
        }
    }
}

impl AuthCommand {
    fn apply(self, _params: &mut Params) -> &'static str {
        match self {
            AuthCommand::Login => "login",
        }
    }
}
