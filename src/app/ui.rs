use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};
use rust_decimal::Decimal;

use crate::app::{
    portfolio::Portfolio,
    utils::{format_amount, format_quantity},
};

const FIXED_ROWS: u16 = 3 + 3 + 5 + 1;

fn gain_color(amount: Decimal) -> Color {
    if amount >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn render(frame: &mut Frame, portfolio: &Portfolio) {
    // History gets one row per trade plus borders, but never the rows the
    // title, balance, holdings and footer need.
    let history_rows = u16::try_from(portfolio.trades().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let history_height = history_rows.min(frame.area().height.saturating_sub(FIXED_ROWS));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(history_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Portfolio Tracker")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let balance = Paragraph::new(format!(
        "Starting Balance: ${}",
        format_amount(portfolio.starting_balance())
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(balance, chunks[1]);

    let positions = portfolio.positions();

    if positions.is_empty() {
        let empty_message = Paragraph::new("No holdings to display. Add trades first.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Current Holdings").borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[2]);
    } else {
        let header_cells = ["Asset", "Quantity", "Price", "Avg. Cost", "Value", "PnL"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
        let header = Row::new(header_cells).style(Style::default()).height(1);

        let rows = positions.iter().map(|position| {
            let price = position
                .price()
                .map(|price| format!("${}", price.normalize()))
                .unwrap_or_else(|| String::from("-"));
            let market_value = position
                .market_value()
                .map(format_amount)
                .unwrap_or_else(|| String::from("-"));

            let pnl_cell = match position.unrealized_pnl() {
                Some(pnl) => {
                    Cell::from(format_amount(*pnl)).style(Style::default().fg(gain_color(*pnl)))
                }
                None => Cell::from("-"),
            };

            let cells = [
                Cell::from(position.asset().clone()),
                Cell::from(format_quantity(*position.quantity())),
                Cell::from(price),
                Cell::from(format_amount(*position.average_cost())),
                Cell::from(market_value),
                pnl_cell,
            ];

            Row::new(cells).height(1)
        });

        let widths = [
            Constraint::Length(10),
            Constraint::Length(15),
            Constraint::Length(15),
            Constraint::Length(15),
            Constraint::Length(15),
            Constraint::Length(15),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title("Current Holdings").borders(Borders::ALL));

        frame.render_widget(table, chunks[2]);
    }

    let history: Vec<ListItem> = portfolio
        .trades()
        .iter()
        .map(|trade| ListItem::new(trade.to_string()))
        .collect();
    let history = List::new(history).block(Block::default().title("Trade History").borders(Borders::ALL));
    frame.render_widget(history, chunks[3]);

    let footer = Paragraph::new("Press q or Esc to quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[4]);
}
