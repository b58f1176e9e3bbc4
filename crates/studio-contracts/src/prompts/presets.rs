//! Compiled-in preset prompt catalogs.
use super::catalog::PromptCategory;

/// Card-game interface ideas for the UI generator panel.
pub const UI_PROMPT_CATEGORIES: &[PromptCategory] = &[
    PromptCategory {
        name: "Game Table & Layout",
        prompts: &[
            "A top-down view of a classic wooden euchre table with a green felt playing surface. Four player positions should be clearly marked.",
            "Refine the classic wooden table with a darker mahogany finish and subtle, worn textures on the green felt to give it a well-used, comfortable feel.",
            "Mark the player positions with elegant, minimalist icons representing North, South, East, and West, which glow softly when it's that player's turn.",
            "A modern, minimalist UI for a euchre game table. Use clean lines, abstract player indicators, and a dark theme.",
            "Enhance the modern UI by adding subtle neon highlights in a contrasting color (like cyan or magenta) that trace the flow of play and highlight winning cards.",
            "For the abstract player indicators, create animated geometric shapes that pulse gently and change form to indicate the current dealer or bidder.",
            "Design the main game screen for a 4-player euchre game, optimized for a tablet in landscape mode. Player's hand should be at the bottom.",
            "Integrate the score display seamlessly into the top corners of the tablet layout, and place the current trump indicator in a visually accessible but non-intrusive central top position.",
            "Ensure the touch targets for cards in the player's hand are large and forgiving for the tablet interface, with a clear visual 'lift' animation on touch-down.",
            "Create the central playing area where tricks are played. Each of the four card slots should be clearly associated with a player position.",
            "When a card is played into a slot, add a brief, subtle animation of the player's avatar or icon appearing behind the card to reinforce ownership.",
            "Design the empty card slots as slightly indented placeholders with a soft inner shadow, which disappears when a card is played on top, giving it a physical feel.",
            "A component showing the 'kitty' or 'crib' - the face-down cards not in play.",
            "Render the 'kitty' as a small, neat stack of four face-down cards, slightly offset from each other, with a subtle glow to indicate they are special.",
            "When the dealer picks up the trump and discards, create an animation where one card from their hand smoothly moves to the kitty, joining the stack face-down.",
            "UI for the single face-up card that is used to propose the trump suit. It should be visually distinct and centrally located during the bidding phase.",
            "Frame the face-up trump proposal card with a pulsating golden border to draw attention to it during the bidding phase. The pulse should quicken as a player's decision timer runs down.",
            "When a player orders up the dealer, create a satisfying animation where the proposal card lifts up and flies directly into the dealer's hand area.",
            "A responsive layout for the euchre game that adapts from a 4-corner desktop view to a vertical stack on mobile devices.",
            "On mobile, collapse the opponents' views into compact summary bars at the top, showing avatar, card count, and name, to maximize screen space for the player's hand and the playing area.",
            "For the mobile vertical layout, ensure the central playing area remains the focal point, with player hands and info arranged logically above and below it for a clear, one-handed play experience.",
        ],
    },
    PromptCategory {
        name: "Player Hand & Info",
        prompts: &[
            "The player's hand of five cards, displayed in a fanned-out arc at the bottom of the screen. Cards should slightly overlap.",
            "Add a subtle 'lift and highlight' effect on hover to give tactile feedback, and make the selected card slightly larger than the others.",
            "Create a card sorting button that automatically arranges the player's hand by suit and rank, with the trump suit always grouped and prioritized on one side.",
            "A UI component for a single playing card. It should be clear, readable, and have variants for red and black suits.",
            "Design a special visual treatment for the Right Bower (Jack of trump) and Left Bower (other Jack of same color) to make them instantly recognizable as the top two cards.",
            "Create three distinct card back designs that players can choose from in the settings: a classic intricate pattern, a modern geometric one, and a minimalist solid color.",
            "A visual indicator for which player is the current dealer, perhaps a small 'D' icon next to their avatar.",
            "Animate the dealer icon by having it slide smoothly from the previous dealer to the new dealer at the start of each hand.",
            "When it's the dealer's turn to bid, make the dealer icon pulse gently to draw their attention.",
            "A component for displaying an opponent's information: their avatar, username, and number of cards in hand (represented by card backs).",
            "When an opponent plays a card, make their avatar frame flash briefly to indicate who played.",
            "If an opponent goes alone, gray out their partner's avatar and info panel to make it clear they are not participating in the hand.",
            "A visual state for a player's card in hand when it is selected or hovered over, ready to be played.",
            "Upon selecting a card, show a subtle 'confirm play' arrow or outline in the central playing area where the card will land.",
            "If a player tries to play an illegal card (e.g., not following suit when possible), make the selected card shake slightly and show a small red 'X' icon.",
            "Highlight the cards in the player's hand that are legal to play during a trick.",
            "For the legal cards, add a soft green glow to their border. Make all illegal cards slightly darker and desaturated.",
            "If the player has no legal moves other than to play trump, make the trump cards in their hand pulse slightly.",
            "A 'going alone' indicator, showing when a player's partner is sitting out the hand. The partner's avatar could be grayed out.",
            "In the center of the table, add a small, elegant text element that says '[Player Name] is going alone!' after the decision is made.",
            "For the player who is going alone, add a subtle crown icon or glow effect to their avatar for the duration of the hand.",
        ],
    },
    PromptCategory {
        name: "Bidding & Trump",
        prompts: &[
            "A set of buttons for the first round of bidding: 'Order Up', 'Assist', and 'Pass'.",
            "Make the 'Order Up' and 'Assist' buttons visually distinct (e.g., green/blue) from the 'Pass' button (e.g., gray/red) to separate aggressive from passive actions.",
            "Add a countdown timer ring around the bidding buttons to show the player how much time they have left to make a decision.",
            "A modal or overlay for the second round of bidding, allowing the player to select a suit (clubs, diamonds, hearts, spades) as trump.",
            "Inside the modal, present the four suit icons. On hover, show a tooltip explaining the strategic implications of choosing that suit based on the player's hand.",
            "After a suit is selected, have the corresponding icon enlarge and glow, while the others fade away, before closing the modal.",
            "A clear visual indicator on the screen for what the current trump suit is, perhaps an icon in the corner.",
            "Place the trump indicator icon inside a dedicated, stylized component that also displays the name of the team who called trump.",
            "When a card of the trump suit is played, make the main trump indicator icon pulse once to reinforce the suit's power.",
            "UI for when a dealer is forced to pick up the trump card. Show the card animating into their hand and them discarding one card face-down.",
            "After the card is picked up, highlight the player's hand and prompt them to 'Choose a card to discard'. The discard action should have a clear confirmation.",
            "The discarded card should animate smoothly from the hand to a face-down position in a dedicated discard area, separate from the kitty.",
            "A 'Stick the Dealer' rule indicator, which changes the bidding options on the final round.",
            "When the 'Stick the Dealer' rule is active, display a prominent but temporary banner that says 'Stick the Dealer!' and disables the 'Pass' button for the dealer.",
            "Change the background of the dealer's bidding modal to a warning color (like amber) to signify they are in a must-call situation.",
            "A prompt asking the player if they want to 'Go Alone' after trump is called, with 'Yes' and 'No' buttons.",
            "Make the 'Go Alone' prompt a visually exciting modal with high-contrast colors and bold text to emphasize the high-risk, high-reward nature of the decision.",
            "Add a small info icon to the 'Go Alone' prompt that, on hover, explains the scoring benefits (+4 points for 5 tricks) and risks.",
        ],
    },
    PromptCategory {
        name: "Gameplay",
        prompts: &[
            "An animation for a card being played, moving from the player's hand to their slot in the center of the table.",
            "Refine the animation so the card has a slight arc and rotation, making it feel like it was physically thrown onto the table.",
            "Add a subtle, unique sound effect for the card landing on the table surface.",
            "A visual effect for the winning card of a trick, such as a glow or a border highlight.",
            "After the last card is played, have the other three cards fade slightly, then animate a golden wreath or crown icon appearing over the winning card.",
            "The winning card should pulse with light before the entire trick is collected.",
            "An animation for the four played cards being collected and moved to the trick pile of the winning player.",
            "Instead of just moving, have the cards stack neatly on top of each other, then animate as a single packet to the winner's trick pile.",
            "The winner's trick pile should increment with a satisfying 'tick' animation and sound.",
            "A small component next to each team's score showing how many tricks they have won in the current hand (out of 5).",
            "Represent the won tricks as small, filled-in icons (like stars or diamonds). When a trick is won, animate the next icon filling in.",
            "When a team wins their third trick (securing the point), make their trick counter flash and display a '+1 pt' text briefly.",
            "A 'Your Turn' indicator, using a glowing border or text to prompt the player to act.",
            "Animate the glowing border around the player's avatar with a pulsing effect, and display a large but semi-transparent 'Your Turn' text in the center of the screen that fades after a few seconds.",
            "If the player is taking too long, make the 'Your Turn' indicator's pulse speed up.",
            "A visual representation of the 'left bower' card, showing it as part of the trump suit and as the second-highest card.",
            "When trump is selected, automatically add a small, unobtrusive trump suit icon to the corner of the Left Bower card in every player's hand to mark it.",
            "If the Left Bower is played, add a special visual effect, like a trail of light in the trump suit's color, as it moves to the center.",
            "UI showing the last trick played, with the four cards and the winner visible in a corner of the screen.",
            "Design the 'last trick' component as a small, dismissible overlay. The winning card should be slightly larger than the other three.",
            "Add a small icon of the player who won the trick next to the four cards in the 'last trick' view.",
        ],
    },
    PromptCategory {
        name: "Scoring & State",
        prompts: &[
            "A classic euchre scoreboard using two cards (e.g., a 6 and a 4) to cover pips and keep score up to 10.",
            "Animate the covering card sliding smoothly to reveal the next pip when a point is scored.",
            "Make the pips that represent the current score glow slightly to improve readability.",
            "A modern digital scoreboard showing the score for 'Us' and 'Them' as numbers, from 0 to 10.",
            "When a team scores, have the number animate up with a quick, satisfying 'tick' effect, like a slot machine.",
            "Add small icons next to the 'Us' and 'Them' labels, perhaps using the players' avatars.",
            "A 'Game Point' visual alert when a team reaches 9 points.",
            "When a team hits 9 points, make their score on the scoreboard pulse with a golden glow and display a 'Match Point!' banner briefly.",
            "During the hand where a team is at match point, their side of the scoreboard should have a subtle, persistent shimmer.",
            "A 'Game Over' modal that displays the final score, congratulates the winners, and has buttons for 'New Game' and 'Exit to Lobby'.",
            "In the 'Game Over' modal, show the avatars of the winning team with confetti falling around them. The 'New Game' button should be the primary, most prominent call to action.",
            "Add a 'View Stats' button to the modal that shows a summary of the game, like how many euchres occurred and who went alone most often.",
            "A visual effect for scoring points: +1 for 3-4 tricks, +2 for 5 tricks, +4 for going alone and winning 5 tricks.",
            "Create a dynamic text animation that pops up near the scoring team's trick counter, explicitly stating how they scored (e.g., 'March! +2 Points', 'Alone! +4 Points').",
            "The intensity of the scoring visual effect should increase with the points scored. A +4 should be much more dramatic than a +1.",
            "A 'Euchred!' banner or animation for when the team that called trump fails to take at least 3 tricks.",
            "Design a bold, impactful 'EUCHRED!' animation in a slightly aggressive font that appears over the offending team's play area. The defending team's score should animate with '+2 Points!'",
            "Add a unique, slightly sad sound effect (like a trombone) when a team is euchred.",
        ],
    },
    PromptCategory {
        name: "Lobby & Menus",
        prompts: &[
            "A game lobby screen with four slots for players to join. Show avatars and usernames. A 'Ready' checkbox for each player.",
            "When a player joins a slot, have their avatar and info card animate into place. The 'Ready' checkbox should turn into a large, green, glowing checkmark when ticked.",
            "Add a 'Host' crown icon to the player who created the lobby, giving them the ability to start the game or kick players.",
            "A 'Create Game' modal with options for setting house rules, like 'Stick the Dealer'.",
            "Design the house rule options as stylish toggle switches. Add a small 'i' icon next to each rule that explains what it does on hover.",
            "Include an option to make the game 'Invite Only' versus 'Public'.",
            "A settings menu overlay with controls for sound volume, animation speed, and card back design.",
            "Use sliders for volume and animation speed, providing immediate visual feedback. The card back design should show a preview of the selected back.",
            "Add a 'Confirm Changes' button and a 'Reset to Default' option in the settings menu.",
            "A 'How to Play' screen that explains the basic rules of Euchre with simple graphics.",
            "Organize the 'How to Play' screen with tabs for 'The Basics', 'Bidding', 'Scoring', and 'Special Cards' for easy navigation.",
            "Use simple, animated diagrams to illustrate concepts like 'what is a bower?' and 'how to follow suit'.",
            "A chat box component for players to communicate during the game.",
            "Make the chat box collapsible to save screen space. A new message should trigger a small, non-intrusive notification bubble.",
            "Include a button for quick emoji reactions that appear temporarily above the player's avatar.",
            "A player profile component showing stats like 'Games Won' and 'Total Euchres'.",
            "Design the profile as a stylish card that appears when you click on a player's avatar. Use bar graphs or pie charts to visualize stats like 'Win/Loss Ratio'.",
            "Add a 'Friend Request' button to the profile component for players you aren't already friends with.",
            "An invitation popup to join a friend's euchre game.",
            "The invitation should be a 'toast' notification that is visually appealing and has clear 'Accept' and 'Decline' buttons.",
            "If the player is already in a game, the 'Accept' button should be disabled and the notification should state that they must finish their current game first.",
        ],
    },
    PromptCategory {
        name: "Themes",
        prompts: &[
            "A dark mode theme for a euchre game, with neon highlights for cards and actions.",
            "For the neon theme, make the trump suit indicator glow intensely, and have played cards leave a faint neon trail as they animate.",
            "Use a font that looks like a neon sign for key text elements like 'Euchred!' and player names.",
            "A skeuomorphic design for a euchre game, with realistic wood textures, shiny cards, and casino-style chips for scoring.",
            "Animate the casino chips for scoring, having them slide and stack with a satisfying clinking sound.",
            "The playing cards should have a glossy finish that catches a virtual light source as they move.",
            "A 'Wild West Saloon' theme, with a rustic poker table, vintage card designs, and western-style fonts.",
            "The background should be a dimly-lit saloon interior, with faint ambient sounds like a player piano.",
            "Use a 'Wanted Poster' style for the Game Over screen, showing the winning team.",
            "A futuristic, sci-fi theme for a euchre game, with holographic cards and a sleek spaceship interior as the background.",
            "The cards should flicker into existence when dealt, and dissolve when a trick is taken. The playing surface could be a holographic projection.",
            "Player avatars could be contained within sleek, floating holographic pods.",
            "A fantasy theme, where suits are represented by factions (e.g., elves, dwarves) and the table is a stone altar.",
            "Customize the face cards to be fantasy characters: Elven King, Dwarven Queen, Orc Jack.",
            "The winning card of a trick could trigger a brief, magical particle effect related to its faction's theme.",
            "A minimalist, abstract theme using simple shapes and a limited color palette to represent cards and players.",
            "Represent suits with simple icons (a circle, square, triangle, cross) and ranks with dots instead of numbers.",
            "Animations should be crisp and geometric, like shapes sliding and snapping into place.",
        ],
    },
    PromptCategory {
        name: "Misc Components",
        prompts: &[
            "A 'Waiting for player...' indicator that shows a spinner over the avatar of the player whose turn it is.",
            "Customize the spinner to be a rotating card back, or a sand-timer icon that slowly depletes.",
            "The text should be more specific, e.g., 'Waiting for [Player Name] to bid...' or '...to play a card.'",
            "An emoji or quick-chat reaction system for players to send simple messages like 'Nice play!' or a thumbs-up.",
            "The emojis should appear above the player's avatar and play a short, bouncy animation before fading out.",
            "Create a small, circular menu that appears on long-pressing a player's avatar, allowing you to choose from 5-6 common reactions.",
            "A connection status icon for each player (green for good, red for disconnected).",
            "If a player disconnects, overlay their avatar with a semi-transparent red color and a 'Reconnecting...' message. The game should pause with a countdown.",
            "Add a yellow icon for 'unstable connection' if their ping is high.",
            "A confirmation dialog for when a player tries to leave a game in progress.",
            "The dialog should clearly state the penalty for leaving, such as a loss of rank or a temporary matchmaking ban.",
            "Use a high-alert color scheme (reds and yellows) and require the user to type 'LEAVE' to confirm, to prevent accidental exits.",
            "A card-dealing animation where cards fly from the dealer's position to each player's hand.",
            "Make the dealing animation fast and satisfying, with the cards arcing gracefully. Each card should make a soft 'swoosh' sound as it travels.",
            "The final card dealt to each player should flip over briefly to show its face before joining their hand, adding a little flair.",
            "A tutorial tooltip that points to the turned-up card and explains the 'Order Up' option to a new player.",
            "Design the tooltip to appear only for players below a certain level or rank. It should have a friendly, illustrative icon.",
            "The tooltip should be interactive; when the player completes the action (e.g., clicks 'Pass'), the tooltip should congratulate them and fade out.",
        ],
    },
];

/// Art-direction ideas for the image generator panel.
pub const IMAGE_PROMPT_CATEGORIES: &[PromptCategory] = &[
    PromptCategory {
        name: "Artistic Movements",
        prompts: &[
            "Render in the style of Impressionism, focusing on light and movement.",
            "Apply a Surrealist aesthetic, with dreamlike and bizarre imagery.",
            "Transform into a Cubist masterpiece, deconstructing subjects into geometric forms.",
            "Reimagine as a vibrant Pop Art piece with bold colors and halftone dots.",
            "Adopt the flowing, organic lines of Art Nouveau.",
            "Convert to a stark, emotional German Expressionist woodcut.",
            "Apply the chaotic energy of Abstract Expressionism.",
            "Render in the classical, idealized style of the Renaissance.",
            "Give it a dramatic, high-contrast Baroque look with chiaroscuro lighting.",
            "Transform into a delicate, romantic Rococo painting.",
            "Recreate in the precise, machine-like style of Futurism.",
            "Adopt the minimalist, primary-colored approach of De Stijl (Mondrian).",
            "Apply a photorealistic style with meticulous detail.",
            "Transform into a Symbolist painting, rich with metaphorical meaning.",
            "Give it the clean, sharp lines of Precisionism.",
            "Render with the raw, untutored look of Art Brut.",
            "Adopt the decorative, patterned style of the Arts and Crafts movement.",
            "Reimagine as a Russian Constructivist propaganda poster.",
            "Apply the shimmering, mosaic-like quality of Pointillism.",
            "Transform into a grand, epic scene in the style of the Hudson River School.",
        ],
    },
    PromptCategory {
        name: "Cyberpunk & Sci-Fi",
        prompts: &[
            "Infuse with a neon-noir, Blade Runner aesthetic.",
            "Transform into a high-tech, GITS-inspired cyborg.",
            "Render as a sprawling, dystopian cyberpunk cityscape.",
            "Apply a holographic glitch effect over the subject.",
            "Reimagine as a bio-mechanical creation by H.R. Giger.",
            "Give it a retro-futuristic look with vacuum tubes and chrome fins.",
            "Transform into a scene from a gritty, post-apocalyptic wasteland.",
            "Render as a sleek, minimalist interface from a sci-fi spaceship.",
            "Add augmented reality overlays and data streams.",
            "Depict as a character in a space opera with alien flora.",
            "Transform into a massive, derelict starship interior.",
            "Apply a \"datamosh\" glitch art style.",
            "Reimagine as a creature made of liquid metal.",
            "Render in the style of a vintage sci-fi pulp magazine cover.",
            "Give it a clean, utopian sci-fi aesthetic, like Star Trek.",
            "Transform into a scene within a vast virtual reality world.",
            "Add glowing data-tattoos and cybernetic implants.",
            "Recreate as a technical blueprint for a futuristic robot.",
            "Render as a soldier in powered armor.",
            "Depict a scene of first contact with an alien intelligence.",
        ],
    },
    PromptCategory {
        name: "Fantasy & Mythological",
        prompts: &[
            "Illustrate as a character from a high-fantasy epic.",
            "Transform into a mythical creature from Greek mythology.",
            "Render as an enchanted, glowing forest scene.",
            "Depict as a powerful sorcerer casting a complex spell.",
            "Reimagine as an ancient, weathered dragon.",
            "Give it the style of a medieval illuminated manuscript.",
            "Transform into a scene from Norse mythology, like Ragnarok.",
            "Render as a majestic, elven city built into trees.",
            "Add ethereal fairy wings and a magical aura.",
            "Depict as a dwarven forge deep within a mountain.",
            "Recreate as a legendary cursed artifact.",
            "Illustrate in the dark, gothic fantasy style of Dark Souls.",
            "Transform into a celestial being made of starlight.",
            "Render as a whimsical scene from a fairy tale.",
            "Give it the look of a tarot card, rich with symbolism.",
            "Reimagine as a creature from Japanese folklore (yokai).",
            "Depict as a knight in ornate, magical armor.",
            "Transform into a lost, underwater city like Atlantis.",
            "Render as a creature from the Cthulhu Mythos.",
            "Add elements of alchemical symbols and diagrams.",
        ],
    },
    PromptCategory {
        name: "Horror & Gothic",
        prompts: &[
            "Apply a dark, gothic horror aesthetic.",
            "Render in the style of a Junji Ito manga, with body horror.",
            "Transform into a grotesque, Cronenberg-esque creature.",
            "Give it the look of a found footage horror film still.",
            "Reimagine as a creature from a silent horror movie like Nosferatu.",
            "Depict as a haunted, dilapidated Victorian mansion.",
            "Illustrate in the unsettling, surreal style of Zdzisław Beksiński.",
            "Add elements of cosmic horror, hinting at vast, unknowable evils.",
            "Transform into a creepy, porcelain doll.",
            "Render as a scene from a slasher film, with dramatic shadows.",
            "Give it the grainy, saturated look of a Giallo horror film.",
            "Reimagine as a ghostly figure in a long, dark hallway.",
            "Apply a filter of grime, decay, and urban rot.",
            "Illustrate as a page from a madman's diary.",
            "Transform into a monster from a John Carpenter film.",
            "Depict as a haunted forest with twisted, grasping trees.",
            "Render with a single, terrifying light source from below.",
            "Give it the aesthetic of a plague doctor in a deserted city.",
            "Reimagine as a zombie or other undead creature.",
            "Add unsettling text that looks like it was scratched into the image.",
        ],
    },
    PromptCategory {
        name: "Nature & Landscape",
        prompts: &[
            "Reimagine as a majestic, Bob Ross-style landscape painting.",
            "Transform into a grand, Ansel Adams-inspired black and white photograph.",
            "Render as a vibrant, tropical rainforest teeming with life.",
            "Depict a serene, minimalist Japanese Zen garden.",
            "Illustrate as a dramatic, stormy seascape.",
            "Give it the look of a vast, arid desert at sunset.",
            "Transform into a scene of the Aurora Borealis over a frozen tundra.",
            "Render as a macro photograph of a flower, showing intricate details.",
            "Reimagine as a landscape viewed through a kaleidoscope.",
            "Depict an enchanted forest with bioluminescent plants.",
            "Give it the aesthetic of a vintage National Park poster.",
            "Transform into a single, ancient, wise-looking tree.",
            "Render as a powerful volcanic eruption.",
            "Illustrate as a peaceful countryside scene with rolling hills.",
            "Reimagine as a geological cross-section of the earth.",
            "Depict a terrarium or a miniature world in a bottle.",
            "Give it the look of an infrared photograph, with surreal colors.",
            "Transform into a majestic mountain range shrouded in mist.",
            "Render as a tranquil scene of a stream flowing through a forest.",
            "Illustrate as a field of wildflowers in a Ghibli-esque style.",
        ],
    },
    PromptCategory {
        name: "Vintage & Retro",
        prompts: &[
            "Give it the look of a faded, 1970s Kodachrome photograph.",
            "Transform into a bold, Art Deco travel poster from the 1920s.",
            "Render as a groovy, psychedelic piece of 1960s art.",
            "Apply the aesthetic of an 8-bit or 16-bit pixel art video game.",
            "Reimagine as a vintage, hand-drawn botanical illustration.",
            "Give it the grainy, black and white look of a film noir still.",
            "Transform into a mid-century modern illustration with clean lines.",
            "Render as a page from a 1950s science fiction comic book.",
            "Apply the look of a damaged, sepia-toned daguerreotype.",
            "Reimagine as a Victorian-era engraving.",
            "Give it the neon and chrome aesthetic of a 1980s album cover.",
            "Transform into a WWII-era propaganda poster.",
            "Render as a classic, airbrushed pin-up illustration.",
            "Apply the simple, charming style of a 1930s rubber hose cartoon.",
            "Reimagine as a design on a vintage tin toy.",
            "Give it the look of an old, water-stained map.",
            "Transform into a matchbook cover design from the 1940s.",
            "Render in the style of a technical illustration from an old encyclopedia.",
            "Apply the aesthetic of a 1990s Lisa Frank creation.",
            "Reimagine as a screen print concert poster from the 1970s.",
        ],
    },
    PromptCategory {
        name: "Material & Texture",
        prompts: &[
            "Recreate as a sculpture carved from polished marble.",
            "Transform into a rugged, weathered piece of driftwood.",
            "Render as if it were forged from rusted metal and copper.",
            "Illustrate as a delicate, intricate origami creation.",
            "Give it the texture of rough, hand-made paper.",
            "Reimagine as a stained glass window, glowing with light.",
            "Construct the scene entirely out of LEGO bricks.",
            "Transform into a soft, knitted or crocheted object.",
            "Render as a detailed, cross-hatched ink drawing.",
            "Apply the look of being carved from a single piece of jade.",
            "Reimagine as a vibrant, patterned mosaic tile artwork.",
            "Give it the texture of cracked, peeling paint on old wood.",
            "Transform into an object made of shimmering, iridescent crystal.",
            "Render as if it were made of flowing, molten gold.",
            "Illustrate as a chalk or pastel drawing on a rough surface.",
            "Recreate as a plush, felted wool sculpture.",
            "Give it the look of being etched into a sheet of glass.",
            "Transform into a claymation or plasticine model.",
            "Render as an intricate wire sculpture.",
            "Apply the texture of rich, embroidered velvet.",
        ],
    },
];
