// ==========================================
// 장치장 현황판 - 실행 진입점
// ==========================================
// yard-board serve [옵션]   HTTP 서버 실행 (기본)
// yard-board parse <경로>   로컬 파일 파싱 → stdout JSON
// ==========================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use yard_board::api::BoardApi;
use yard_board::config::{AppConfig, ConfigOverrides};
use yard_board::domain::LocationCatalog;
use yard_board::server::{self, AppState};
use yard_board::{i18n, logging};

#[derive(Parser)]
#[command(name = "yard-board", version, about = "장치장 현황판 - 재고 데이터를 장치장 배치도에 매핑")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// HTTP 서버 실행
    Serve(ServeArgs),
    /// 로컬 파일(.xlsx/.xls/.csv 또는 텍스트)을 파싱해 JSON 출력
    Parse {
        /// 입력 파일 경로
        path: PathBuf,
    },
}

#[derive(Args, Default)]
struct ServeArgs {
    /// 수신 주소 (host:port)
    #[arg(long)]
    bind: Option<String>,

    /// 업로드 최대 크기 (바이트)
    #[arg(long)]
    max_upload_bytes: Option<usize>,

    /// 에러 메시지 언어 (ko/en)
    #[arg(long)]
    locale: Option<String>,

    /// 로그 형식 (pretty/json)
    #[arg(long)]
    log_format: Option<String>,
}

impl From<ServeArgs> for ConfigOverrides {
    fn from(args: ServeArgs) -> Self {
        ConfigOverrides {
            bind_addr: args.bind,
            max_upload_bytes: args.max_upload_bytes,
            locale: args.locale,
            log_format: args.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await,
        Command::Parse { path } => parse(path),
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?.with_overrides(args.into())?;

    logging::init(config.log_format);
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{} v{}", yard_board::APP_NAME, yard_board::VERSION);
    tracing::info!("설정: {:?}", config);
    tracing::info!("==================================================");

    let catalog = Arc::new(LocationCatalog::standard());
    tracing::info!(
        "위치 카탈로그 로드: 노드 {}개, 슬롯 {}개",
        catalog.node_count(),
        catalog.slot_count()
    );

    server::run(&config, AppState::new(catalog)).await
}

fn parse(path: PathBuf) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_format);
    i18n::set_locale(&config.locale);

    let api = BoardApi::new(Arc::new(LocationCatalog::standard()));
    let board = api.parse_path(&path)?;

    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
