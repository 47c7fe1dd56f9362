// deployer/src/bindings.rs
#![allow(clippy::all)]
use ethers::prelude::abigen;

// Only the surface the deploy script and the test suite touch.
// The full ABI comes from the Hardhat artifact when one is available.
abigen!(
    Deeznuts,
    r#"[
        constructor(address charityWallet, address marketingWallet)
        event Approval(address indexed owner, address indexed spender, uint256 value)
        event Transfer(address indexed from, address indexed to, uint256 value)
        event SwapAndLiquify(uint256 tokensSwapped, uint256 ethReceived, uint256 tokensIntoLiqudity)
        function name() external view returns (string)
        function symbol() external view returns (string)
        function decimals() external view returns (uint8)
        function totalSupply() external view returns (uint256)
        function balanceOf(address account) external view returns (uint256)
        function allowance(address owner, address spender) external view returns (uint256)
        function transfer(address recipient, uint256 amount) external returns (bool)
        function approve(address spender, uint256 amount) external returns (bool)
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool)
        function owner() external view returns (address)
        function excludeFromFee(address account) external
        function includeInFee(address account) external
        function isExcludedFromFee(address account) external view returns (bool)
        function uniswapV2Router() external view returns (address)
        function uniswapV2Pair() external view returns (address)
    ]"#,
    event_derives(serde::Deserialize, serde::Serialize)
);

abigen!(
    IUniswapV2Router02,
    r#"[
        function factory() external pure returns (address)
        function WETH() external pure returns (address)
        function addLiquidityETH(address token, uint256 amountTokenDesired, uint256 amountTokenMin, uint256 amountETHMin, address to, uint256 deadline) external payable returns (uint256 amountToken, uint256 amountETH, uint256 liquidity)
    ]"#
);

// END OF FILE: deployer/src/bindings.rs
