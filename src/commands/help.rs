use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let embed = CreateEmbed::default()
        .title("🤝 Winzer Escrow")
        .description("Escrow between buyers and sellers: the buyer proposes a deal, both parties approve it, then settle outside the bot.")
        .color(0x00b0f4)
        .field(
            "📋 Deals",
            "`$create` - Start a new deal as buyer\n`$deal <id>` - Deal info with approve/reject buttons\n`$mydeals` - Deals you are a party to",
            false,
        )
        .field(
            "🎯 General",
            "`$start` / `$help` - Show this message",
            false,
        )
        .field(
            "ℹ️ How it works",
            "A deal completes once buyer and seller have both approved.\nA single reject from either party is final.",
            false,
        );

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
