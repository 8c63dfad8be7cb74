use std::{error::Error, io::Write, process};

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info, Level};
use yoyaku::{
    domain::{
        reservation::{
            Reservation, ReservationId, ReservationKind, ReservationRepository, RoomNumber,
            SeatNumber, DATE_FORMAT,
        },
        IdSequence,
    },
    infrastructure::reservation::InMemoryReservationRepository,
    YoyakuConfig,
};

#[tokio::main]
async fn main() {
    match YoyakuConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = run().await {
                error!("アプリケーションエラー: {}", error);
                process::exit(1);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("アプリケーションエラー: {}", error);
            process::exit(1);
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let mut console = Console::new();
    let mut repository = InMemoryReservationRepository::new();
    let mut sequence = IdSequence::new();

    create_reservations(&mut console, &mut repository, &mut sequence).await?;
    run_menu(&mut console, &mut repository).await?;
    Ok(())
}

/// 予約の一括作成フェーズ
///
/// IDは種別の検証より先に発番するため、不正な種別で予約の作成を
/// 飛ばした場合もそのIDは消費される。
async fn create_reservations<R>(
    console: &mut Console,
    repository: &mut R,
    sequence: &mut IdSequence,
) -> Result<(), Box<dyn Error>>
where
    R: ReservationRepository,
{
    println!("Enter the number of reservations you want to create: ");
    let count = console.read_number().await?;

    for batch_index in 0..count {
        println!();
        println!("Choose reservation type (1 for Resort, 2 for Railway):");
        let choice = console.read_number().await?;

        let id: ReservationId = sequence.generate();
        println!("Generated Reservation ID: {}", id);

        let customer_name = console.prompt("Customer Name: ").await?;
        let reservation_date = console
            .prompt_date("Reservation Date (dd/MM/yyyy): ")
            .await?;

        let kind = match choice {
            1 => {
                let room_number = RoomNumber::assign(batch_index as usize);
                println!("Assigned Room Number: {}", room_number);
                ReservationKind::Resort { room_number }
            }
            2 => {
                let seat_number = SeatNumber::assign(batch_index as usize);
                println!("Assigned Seat Number: {}", seat_number);
                ReservationKind::Railway { seat_number }
            }
            _ => {
                println!("Invalid choice. Skipping this reservation.");
                continue;
            }
        };

        let entity = Reservation::create(id, customer_name, reservation_date, kind)?;
        repository.save(&entity).await?;
        info!("予約を作成しました: {}", id);
    }
    Ok(())
}

/// 対話メニューフェーズ
async fn run_menu<R>(console: &mut Console, repository: &mut R) -> Result<(), Box<dyn Error>>
where
    R: ReservationRepository,
{
    loop {
        println!();
        println!("Menu:");
        println!("1. Check Reservation Status");
        println!("2. Modify Reservation Details");
        println!("3. Obtain Room/Seat Number");
        println!("4. Exit");
        let choice = console.prompt_number("Enter your choice: ").await?;

        match MenuChoice::from_number(choice) {
            Some(MenuChoice::CheckStatus) => check_status(console, repository).await?,
            Some(MenuChoice::Modify) => modify_details(console, repository).await?,
            Some(MenuChoice::ObtainNumber) => obtain_number(console, repository).await?,
            Some(MenuChoice::Exit) => {
                println!("Exiting the program.");
                break;
            }
            None => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

/// 予約状況を確認する
async fn check_status<R>(console: &mut Console, repository: &mut R) -> Result<(), Box<dyn Error>>
where
    R: ReservationRepository,
{
    let id = console
        .prompt_number("Enter Reservation ID to check status: ")
        .await?;
    match repository.find_by_id(id.into()).await? {
        Some(entity) => println!("{}", entity.status_message()),
        None => println!("Reservation ID not found."),
    }
    Ok(())
}

/// 予約内容を変更する
async fn modify_details<R>(console: &mut Console, repository: &mut R) -> Result<(), Box<dyn Error>>
where
    R: ReservationRepository,
{
    let id = console
        .prompt_number("Enter Reservation ID to modify: ")
        .await?;
    match repository.find_by_id(id.into()).await? {
        Some(mut entity) => {
            let customer_name = console.prompt("Enter new Customer Name: ").await?;
            let reservation_date = console
                .prompt_date("Enter new Reservation Date (dd/MM/yyyy): ")
                .await?;
            entity.modify(customer_name, reservation_date)?;
            repository.save(&entity).await?;
            println!("Reservation details updated successfully.");
            info!("予約を更新しました: {}", id);
        }
        None => println!("Reservation ID not found."),
    }
    Ok(())
}

/// 部屋番号・座席番号を取得する
async fn obtain_number<R>(console: &mut Console, repository: &mut R) -> Result<(), Box<dyn Error>>
where
    R: ReservationRepository,
{
    let id = console
        .prompt_number("Enter Reservation ID to obtain details: ")
        .await?;
    match repository.find_by_id(id.into()).await? {
        Some(entity) => println!("{}", entity.assigned_number()),
        None => println!("Reservation ID not found."),
    }
    Ok(())
}

/// メニューの選択肢
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MenuChoice {
    CheckStatus,
    Modify,
    ObtainNumber,
    Exit,
}

impl MenuChoice {
    fn from_number(number: u64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::CheckStatus),
            2 => Some(MenuChoice::Modify),
            3 => Some(MenuChoice::ObtainNumber),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 標準入力を行単位で読み込む対話コンソール
struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// 1行読み込む
    async fn read_line(&mut self) -> Result<String, Box<dyn Error>> {
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "standard input was closed",
            ))),
        }
    }

    /// 1行読み込んで数値として解釈する
    async fn read_number(&mut self) -> Result<u64, Box<dyn Error>> {
        Ok(self.read_line().await?.trim().parse()?)
    }

    /// プロンプトを表示して1行読み込む
    async fn prompt(&mut self, message: &str) -> Result<String, Box<dyn Error>> {
        print!("{}", message);
        std::io::stdout().flush()?;
        self.read_line().await
    }

    /// プロンプトを表示して数値を読み込む
    async fn prompt_number(&mut self, message: &str) -> Result<u64, Box<dyn Error>> {
        Ok(self.prompt(message).await?.trim().parse()?)
    }

    /// プロンプトを表示して予約日を読み込む
    async fn prompt_date(&mut self, message: &str) -> Result<NaiveDate, Box<dyn Error>> {
        let line = self.prompt(message).await?;
        Ok(NaiveDate::parse_from_str(line.trim(), DATE_FORMAT)?)
    }
}
