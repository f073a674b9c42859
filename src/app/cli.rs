// ==========================================
// 工位排班基础数据 - 命令行入口
// ==========================================
// 职责: 解析子命令，调用API并以文本输出结果
// 约束: 删除类命令必须带 --yes 确认
// ==========================================

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::api::{parse_station_order, parse_station_setting, ApiError, ScheduleApi, WorkplaceApi};
use crate::app::state::AppState;
use crate::engine::{line_name_of, ScheduleReport};
use crate::i18n::{t, t_with_args};

#[derive(Parser, Debug)]
#[clap(author, version, about = "工位排班基础数据维护")]
pub struct Cli {
    /// 本地存储数据库路径（覆盖配置）
    #[clap(long, global = true)]
    pub db: Option<String>,

    /// 排程服务地址（覆盖配置）
    #[clap(long, global = true)]
    pub scheduler_url: Option<String>,

    /// 界面语言 (zh-CN / en)
    #[clap(long, global = true)]
    pub locale: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 人员维护
    Person {
        #[clap(subcommand)]
        command: PersonCommands,
    },
    /// 产线维护
    Line {
        #[clap(subcommand)]
        command: LineCommands,
    },
    /// 工作站维护
    Station {
        #[clap(subcommand)]
        command: StationCommands,
    },
    /// 导出设定档
    Export {
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// 导入设定档（整体替换现有数据）
    Import { file: PathBuf },
    /// 提交排程
    Execute,
    /// 查看最近一次排程结果（查看后即清除）
    #[clap(name = "result")]
    Report,
}

#[derive(Subcommand, Debug)]
pub enum PersonCommands {
    Add { name: String },
    Delete {
        id: String,
        #[clap(flatten)]
        confirm: Confirm,
    },
    /// 切换休假状态
    Leave { id: String },
    /// 查看或修改工作站设定，如 --set s1=yes:high
    Settings {
        id: String,
        #[clap(long = "set")]
        set: Vec<String>,
    },
    List,
}

#[derive(Subcommand, Debug)]
pub enum LineCommands {
    Add { name: String },
    /// 删除产线及其下所有工作站
    Delete {
        id: String,
        #[clap(flatten)]
        confirm: Confirm,
    },
    List,
}

#[derive(Subcommand, Debug)]
pub enum StationCommands {
    Add {
        #[clap(long)]
        line: String,
        #[clap(long)]
        name: String,
        #[clap(flatten)]
        flags: StationFlags,
    },
    Edit {
        id: String,
        #[clap(long)]
        name: String,
        #[clap(long, allow_hyphen_values = true)]
        order: String,
        #[clap(flatten)]
        flags: StationFlags,
    },
    Delete {
        id: String,
        #[clap(flatten)]
        confirm: Confirm,
    },
    List,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct StationFlags {
    #[clap(long)]
    pub high_priority: bool,
    #[clap(long)]
    pub priority_assign: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Confirm {
    /// 确认删除
    #[clap(long)]
    pub yes: bool,
}

impl Confirm {
    fn require(self) -> Result<(), ApiError> {
        if self.yes {
            Ok(())
        } else {
            Err(ApiError::InvalidInput(t("validation.confirmation_required")))
        }
    }
}

/// 执行子命令
pub async fn run(command: Commands, state: &AppState) -> anyhow::Result<()> {
    match command {
        Commands::Person { command } => run_person(command, &mut *state.workplace()?)?,
        Commands::Line { command } => run_line(command, &mut *state.workplace()?)?,
        Commands::Station { command } => run_station(command, &mut *state.workplace()?)?,
        Commands::Export { out_dir } => {
            let path = export_to(&*state.workplace()?, &out_dir)?;
            println!("{}", t_with_args("messages.export_written", &[("path", &path.display().to_string())]));
        }
        Commands::Import { file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("无法读取设定档 {}", file.display()))?;
            state.workplace()?.import_snapshot(&bytes)?;
            println!("{}", t("messages.import_succeeded"));
        }
        Commands::Execute => {
            let request = ScheduleApi::build_request(state.workplace()?.store());
            let result = state.schedule_api.execute(request).await?;
            println!(
                "{}",
                t_with_args(
                    "messages.schedule_stored",
                    &[("count", &result.assignments.len().to_string())]
                )
            );
        }
        Commands::Report => {
            let report = state.schedule_api.latest_report()?;
            print!("{}", render_report(&report));
        }
    }
    Ok(())
}

fn run_person(command: PersonCommands, api: &mut WorkplaceApi) -> Result<(), ApiError> {
    match command {
        PersonCommands::Add { name } => {
            let person = api.add_person(&name)?;
            println!("{} ({})", t_with_args("messages.person_added", &[("name", &person.name)]), person.id);
        }
        PersonCommands::Delete { id, confirm } => {
            confirm.require()?;
            print_changed(api.delete_person(&id)?, &t("messages.deleted"));
        }
        PersonCommands::Leave { id } => match api.toggle_leave(&id)? {
            Some(true) => println!("{}", t("messages.on_leave")),
            Some(false) => println!("{}", t("messages.back_to_work")),
            None => println!("{}", t("messages.nothing_changed")),
        },
        PersonCommands::Settings { id, set } => {
            let mut form = api.settings_form(&id)?;
            if set.is_empty() {
                for group in &form.groups {
                    println!("[{}]", group.line_name);
                    for field in &group.fields {
                        println!(
                            "  {}={}:{}  ({})",
                            field.station_id,
                            if field.setting.ability { "yes" } else { "no" },
                            field.setting.preference,
                            field.station_name
                        );
                    }
                }
                return Ok(());
            }

            for raw in &set {
                let (station_id, setting) = parse_station_setting(raw)?;
                if !form.set_field(&station_id, setting) {
                    return Err(ApiError::InvalidInput(t_with_args(
                        "validation.invalid_setting",
                        &[("value", raw)],
                    )));
                }
            }
            api.submit_settings_form(&form)?;
            println!("{}", t_with_args("messages.settings_saved", &[("name", &form.person_name)]));
        }
        PersonCommands::List => {
            for person in api.list_personnel() {
                let summary = api.station_summary(&person.id)?;
                let leave = if person.on_leave {
                    format!(" [{}]", t("labels.on_leave"))
                } else {
                    String::new()
                };
                println!("{}  {}{}", person.id, person.name, leave);
                println!(
                    "    {}: {}",
                    t("labels.enabled_stations"),
                    join_or_none(&summary.enabled_stations)
                );
                if !summary.preferences.is_empty() {
                    println!("    {}: {}", t("labels.preferences"), summary.preferences.join(", "));
                }
            }
        }
    }
    Ok(())
}

fn run_line(command: LineCommands, api: &mut WorkplaceApi) -> Result<(), ApiError> {
    match command {
        LineCommands::Add { name } => {
            let line = api.add_line(&name)?;
            println!("{} ({})", t_with_args("messages.line_added", &[("name", &line.name)]), line.id);
        }
        LineCommands::Delete { id, confirm } => {
            confirm.require()?;
            print_changed(api.delete_line(&id)?, &t("messages.deleted"));
        }
        LineCommands::List => {
            for overview in api.line_overview() {
                println!("{}  {}", overview.line.id, overview.line.name);
                for station in overview.stations {
                    println!("    {}  {}", station.id, station.name);
                }
            }
        }
    }
    Ok(())
}

fn run_station(command: StationCommands, api: &mut WorkplaceApi) -> Result<(), ApiError> {
    match command {
        StationCommands::Add { line, name, flags } => {
            let station = api.add_station(&line, &name, flags.high_priority, flags.priority_assign)?;
            println!(
                "{} ({})",
                t_with_args("messages.station_added", &[("name", &station.name)]),
                station.id
            );
        }
        StationCommands::Edit { id, name, order, flags } => {
            let order = parse_station_order(&order)?;
            let changed = api.edit_station(&id, &name, order, flags.high_priority, flags.priority_assign)?;
            print_changed(changed, &t("messages.station_updated"));
        }
        StationCommands::Delete { id, confirm } => {
            confirm.require()?;
            print_changed(api.delete_station(&id)?, &t("messages.deleted"));
        }
        StationCommands::List => {
            let lines = api.list_lines();
            for station in api.list_stations() {
                let line_name = line_name_of(station, lines)
                    .map(str::to_string)
                    .unwrap_or_else(|| t("common.unknown_line"));
                let mut flags = Vec::new();
                if station.high_priority {
                    flags.push(t("labels.high_priority"));
                }
                if station.priority_assign {
                    flags.push(t("labels.priority_assign"));
                }
                if let Some(order) = station.order {
                    flags.push(format!("{} {}", t("labels.order"), order));
                }
                println!("{}  {}  [{}]  {}", station.id, station.name, line_name, flags.join(", "));
            }
        }
    }
    Ok(())
}

/// 写出设定档，返回文件路径
fn export_to(api: &WorkplaceApi, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let exported = api.export_snapshot()?;
    let path = out_dir.join(&exported.file_name);
    std::fs::write(&path, &exported.bytes)
        .with_context(|| format!("无法写入设定档 {}", path.display()))?;
    tracing::info!(path = %path.display(), "设定档已导出");
    Ok(path)
}

fn print_changed(changed: bool, message: &str) {
    if changed {
        println!("{}", message);
    } else {
        println!("{}", t("messages.nothing_changed"));
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        t("common.none")
    } else {
        items.join(", ")
    }
}

/// 排程结果文本（按产线分组）
pub fn render_report(report: &ScheduleReport) -> String {
    let mut out = format!("{}\n", report.timestamp);
    if report.groups.is_empty() {
        out.push_str(&t("messages.no_assignments"));
        out.push('\n');
        return out;
    }

    for (line_name, assignments) in &report.groups {
        out.push_str(&format!("== {} ==\n", line_name));
        for a in assignments {
            out.push_str(&format!(
                "  {:>3}  {}  {}\n",
                a.station.effective_order(),
                a.station.name,
                a.person.name
            ));
        }
    }
    out
}
